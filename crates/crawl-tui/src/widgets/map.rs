//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use crawl_core::GameState;
use crawl_core::dungeon::{Position as MapPos, Tile};

/// Fog-covered cell
const HIDDEN: char = '░';
const PLAYER: char = '@';

/// Widget for rendering the dungeon map under fog-of-war
pub struct MapWidget<'a> {
    state: &'a GameState,
    color: bool,
}

impl<'a> MapWidget<'a> {
    pub fn new(state: &'a GameState, color: bool) -> Self {
        Self { state, color }
    }

    fn cell_display(&self, pos: MapPos) -> (char, Style) {
        if !self.state.fog().is_visible(pos) {
            return (HIDDEN, self.styled(Color::DarkGray));
        }
        if pos == self.state.player_pos() {
            return (PLAYER, self.styled(Color::White).bold());
        }

        let tile = self.state.map()[pos];
        let color = match tile {
            Tile::Floor => Color::Gray,
            Tile::Wall => Color::DarkGray,
            Tile::Item => Color::Yellow,
            Tile::Monster => Color::Red,
            Tile::Start => Color::LightBlue,
            Tile::Exit => Color::Green,
        };
        (tile.symbol(), self.styled(color))
    }

    fn styled(&self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.is_game_over() {
            "Game over - r to play again"
        } else {
            "Dungeon"
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let map = self.state.map();
        for row in 0..map.rows().min(inner.height as usize) {
            for col in 0..map.cols().min(inner.width as usize) {
                let (ch, style) = self.cell_display(MapPos::new(row, col));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + col as u16, inner.y + row as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &GameState) -> Buffer {
        let area = Rect::new(0, 0, 7, 6);
        let mut buf = Buffer::empty(area);
        MapWidget::new(state, false).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_player_drawn_at_start() {
        let state = GameState::new();
        let buf = render(&state);
        assert_eq!(buf[Position::new(1, 1)].symbol(), "@");
    }

    #[test]
    fn test_hidden_cells_drawn_as_fog() {
        let state = GameState::with_template(&["S#.", "##E"]).unwrap();
        let buf = render(&state);
        assert_eq!(buf[Position::new(2, 1)].symbol(), "#");
        assert_eq!(buf[Position::new(3, 1)].symbol(), "░");
        assert_eq!(buf[Position::new(3, 2)].symbol(), "░");
    }
}
