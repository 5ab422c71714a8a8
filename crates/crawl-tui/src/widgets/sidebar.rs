//! Inventory and quest log sidebar

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crawl_core::GameState;

/// Widget showing the inventory and the most recent log entries
pub struct SidebarWidget<'a> {
    state: &'a GameState,
    log_lines: usize,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(state: &'a GameState, log_lines: usize) -> Self {
        Self { state, log_lines }
    }
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default().add_modifier(Modifier::BOLD);

        let inventory = if self.state.inventory().is_empty() {
            "(empty)".to_string()
        } else {
            self.state.inventory().join(", ")
        };

        let mut lines = vec![
            Line::styled("Inventory", heading),
            Line::raw(inventory),
            Line::raw(""),
            Line::styled("Recent Log", heading),
        ];
        lines.extend(
            self.state
                .log_tail(self.log_lines)
                .iter()
                .map(|entry| Line::raw(entry.as_str())),
        );

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
