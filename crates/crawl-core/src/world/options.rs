//! Game options and configuration (crawlrc)
//!
//! Handles user preferences and configuration file loading. The file format
//! follows the classic rc layout:
//!
//! ```text
//! # comment
//! OPTIONS=logtail:9,item:Golden Key,!color
//! MAP=S..#.
//! MAP=.#I..
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::MapError;
use crate::{DEFAULT_ITEM_NAME, DEFAULT_LOG_TAIL};

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of quest log lines a front end shows
    pub log_tail: usize,

    /// Name recorded in the inventory for each collected item
    pub item_name: String,

    /// Colored terminal output
    pub color: bool,

    /// Custom map template rows, replacing the reference layout
    pub map: Option<Vec<String>>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            log_tail: DEFAULT_LOG_TAIL,
            item_name: DEFAULT_ITEM_NAME.to_string(),
            color: true,
            map: None,
        }
    }
}

/// Errors while loading options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),

    #[error("Invalid map: {0}")]
    Map(#[from] MapError),
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            } else if let Some(row) = line.strip_prefix("MAP=") {
                options
                    .map
                    .get_or_insert_with(Vec::new)
                    .push(row.to_string());
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no") {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(name, !negated)
    }

    /// Set a boolean option
    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "color" | "colour" => self.color = value,
            "logtail" | "log_tail" | "item" | "item_name" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }

        match name {
            "logtail" | "log_tail" => {
                self.log_tail = value
                    .parse()
                    .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))?;
            }
            "item" | "item_name" => self.item_name = value.to_string(),
            "color" | "colour" => {
                self.color = match value.to_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(OptionsError::InvalidValue(
                            name.to_string(),
                            value.to_string(),
                        ));
                    }
                };
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GameOptions::default();
        assert_eq!(opts.log_tail, 6);
        assert_eq!(opts.item_name, "Mysterious Item");
        assert!(opts.color);
        assert!(opts.map.is_none());
    }

    #[test]
    fn test_parse_bool_option() {
        let opts = GameOptions::parse_config("OPTIONS=!color").unwrap();
        assert!(!opts.color);
        let opts = GameOptions::parse_config("OPTIONS=nocolor").unwrap();
        assert!(!opts.color);
        let opts = GameOptions::parse_config("OPTIONS=color").unwrap();
        assert!(opts.color);
    }

    #[test]
    fn test_parse_value_option() {
        let config = "OPTIONS=logtail:9, item:Golden Key";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.log_tail, 9);
        assert_eq!(opts.item_name, "Golden Key");

        let opts = GameOptions::parse_config("OPTIONS=log_tail=3").unwrap();
        assert_eq!(opts.log_tail, 3);
    }

    #[test]
    fn test_parse_map_rows() {
        let config = "# tiny level\nMAP=S.E\n\nMAP=.#.\n";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.map, Some(vec!["S.E".to_string(), ".#.".to_string()]));
    }

    #[test]
    fn test_unknown_option() {
        let err = GameOptions::parse_config("OPTIONS=autopickup").unwrap_err();
        assert!(matches!(err, OptionsError::UnknownOption(ref o) if o == "autopickup"));
    }

    #[test]
    fn test_invalid_value() {
        let err = GameOptions::parse_config("OPTIONS=logtail:many").unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue(..)));
        assert_eq!(err.to_string(), "Invalid value 'many' for option 'logtail'");
    }

    #[test]
    fn test_missing_value() {
        let err = GameOptions::parse_config("OPTIONS=item:").unwrap_err();
        assert!(matches!(err, OptionsError::MissingValue(_)));
        let err = GameOptions::parse_config("OPTIONS=logtail").unwrap_err();
        assert!(matches!(err, OptionsError::MissingValue(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameOptions::load_from_file(Path::new("/nonexistent/crawlrc")).unwrap_err();
        assert!(matches!(err, OptionsError::Io(_)));
    }
}
