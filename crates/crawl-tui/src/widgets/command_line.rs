//! Command input line with the last feedback message

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Widget for the text command prompt
pub struct CommandLineWidget<'a> {
    /// Text typed so far, or `None` when the prompt is not focused
    input: Option<&'a str>,
    feedback: &'a str,
}

impl<'a> CommandLineWidget<'a> {
    pub fn new(input: Option<&'a str>, feedback: &'a str) -> Self {
        Self { input, feedback }
    }
}

impl Widget for CommandLineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt = match self.input {
            Some(text) => Line::raw(format!("> {}_", text)),
            None => Line::styled(
                "> (Tab to type commands)",
                Style::default().add_modifier(Modifier::DIM),
            ),
        };

        Paragraph::new(vec![Line::raw(self.feedback), prompt])
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
