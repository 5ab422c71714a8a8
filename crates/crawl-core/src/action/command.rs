//! Text command interpreter
//!
//! Typed commands are normalised (trimmed, lowercased), parsed into a
//! [`Command`] and dispatched onto the same transitions the direct input
//! path uses. Each dispatch returns a short feedback line for the UI; that
//! line is separate from the quest log, although some commands log too.

use core::str::FromStr;

use log::debug;

use super::{Command, Direction, UndoOutcome};
use crate::gameloop::GameState;
use crate::{MSG_NEW_GAME, MSG_NOTHING_TO_UNDO, MSG_UNDONE};

/// Feedback for any input the parser does not recognise
pub const HELP_TEXT: &str =
    "Unknown command. Try: go north|south|east|west, get, undo, look, inventory.";

pub const MSG_BAD_DIRECTION: &str = "Try: north/south/east/west.";
pub const MSG_CANT_GO: &str = "You can't go that way.";
pub const MSG_PICKED_UP: &str = "Picked up.";
pub const MSG_NOTHING_TO_PICK_UP: &str = "Nothing to pick up.";
pub const MSG_GAME_IS_OVER: &str = "The game is over. Type restart to play again.";

/// Parse a line of text into a command
pub fn parse_command(text: &str) -> Command {
    let cmd = text.trim().to_lowercase();

    if cmd.is_empty() {
        return Command::Empty;
    }

    if let Some(rest) = cmd.strip_prefix("go ") {
        let dir = rest.trim();
        return match Direction::from_str(dir) {
            Ok(direction) => Command::Go(direction),
            Err(_) => Command::BadDirection(dir.to_string()),
        };
    }

    match cmd.as_str() {
        "get" | "take" | "pickup" | "pick up" => Command::Pickup,
        "undo" | "back" | "backtrack" => Command::Undo,
        "inventory" | "inv" | "i" => Command::Inventory,
        "look" | "l" => Command::Look,
        "restart" | "reset" | "play again" => Command::Restart,
        _ => Command::Unknown(cmd),
    }
}

impl GameState {
    /// Parse and execute a text command, returning feedback for the UI.
    pub fn process_command(&mut self, text: &str) -> String {
        let command = parse_command(text);
        debug!("command {:?} -> {:?}", text, command);
        self.execute(command)
    }

    /// Execute an already parsed command
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Empty => String::new(),
            Command::Go(direction) => {
                let before = self.player_pos();
                self.step(direction);
                if self.player_pos() == before {
                    MSG_CANT_GO.to_string()
                } else {
                    format!("You go {}.", direction)
                }
            }
            Command::BadDirection(_) => MSG_BAD_DIRECTION.to_string(),
            Command::Pickup => {
                if self.pickup() {
                    MSG_PICKED_UP.to_string()
                } else {
                    MSG_NOTHING_TO_PICK_UP.to_string()
                }
            }
            Command::Undo => match self.undo_move() {
                UndoOutcome::Undone => MSG_UNDONE.to_string(),
                UndoOutcome::NothingToUndo => MSG_NOTHING_TO_UNDO.to_string(),
                UndoOutcome::GameOver => MSG_GAME_IS_OVER.to_string(),
            },
            Command::Inventory => {
                let listing = if self.inventory().is_empty() {
                    "(empty)".to_string()
                } else {
                    self.inventory().join(", ")
                };
                let text = format!("Inventory: {}", listing);
                self.message(text.clone());
                text
            }
            Command::Look => {
                let text = format!("You are on {}.", self.current_tile());
                self.message(text.clone());
                text
            }
            Command::Restart => {
                self.reset();
                MSG_NEW_GAME.to_string()
            }
            Command::Unknown(_) => HELP_TEXT.to_string(),
        }
    }
}
