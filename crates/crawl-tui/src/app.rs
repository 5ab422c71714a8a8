//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crawl_core::GameState;
use crawl_core::world::GameOptions;

use crate::input::{UiAction, key_to_action};
use crate::widgets::{CommandLineWidget, MapWidget, SidebarWidget};

const SIDEBAR_WIDTH: u16 = 36;
/// Wide enough for the game-over title
const MIN_MAP_WIDTH: u16 = 32;

/// UI mode - where key presses go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Keys move the player
    Normal,
    /// Keys are typed into the command line
    CommandInput { input: String },
}

/// Application state
pub struct App {
    /// The running game
    state: GameState,

    /// Loaded options
    options: GameOptions,

    /// Current UI mode
    mode: UiMode,

    /// Feedback from the last typed command
    feedback: String,

    /// Should quit
    should_quit: bool,
}

impl App {
    pub fn new(state: GameState, options: GameOptions) -> Self {
        Self {
            state,
            options,
            mode: UiMode::Normal,
            feedback: String::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.mode {
            UiMode::Normal => self.handle_normal_input(key),
            UiMode::CommandInput { .. } => self.handle_command_input(key),
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        let Some(action) = key_to_action(key) else {
            return;
        };
        log::debug!("ui action {:?}", action);

        match action {
            UiAction::Move(direction) => {
                self.state.step(direction);
            }
            UiAction::Undo => {
                self.state.undo_move();
            }
            UiAction::Reset => self.state.reset(),
            UiAction::StartCommand => {
                self.mode = UiMode::CommandInput {
                    input: String::new(),
                };
            }
            UiAction::Quit => self.should_quit = true,
        }
    }

    fn handle_command_input(&mut self, key: KeyEvent) {
        let UiMode::CommandInput { input } = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.mode = UiMode::Normal,
            KeyCode::Enter => {
                let text = core::mem::take(input);
                self.mode = UiMode::Normal;
                self.feedback = self.state.process_command(&text);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) if !c.is_control() => input.push(c),
            _ => {}
        }
    }

    /// Draw the whole screen
    pub fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(frame.area());

        let map_width = map_column_width(self.state.map().cols());
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(map_width), Constraint::Min(SIDEBAR_WIDTH)])
            .split(rows[0]);

        frame.render_widget(MapWidget::new(&self.state, self.options.color), top[0]);
        frame.render_widget(
            SidebarWidget::new(&self.state, self.options.log_tail),
            top[1],
        );

        let input = match &self.mode {
            UiMode::CommandInput { input } => Some(input.as_str()),
            UiMode::Normal => None,
        };
        frame.render_widget(CommandLineWidget::new(input, &self.feedback), rows[1]);
    }
}

/// Width of the map column for a map `cols` cells wide, borders included
fn map_column_width(cols: usize) -> u16 {
    u16::try_from(cols)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(MIN_MAP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crawl_core::dungeon::Position;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_command(app: &mut App, text: &str) {
        press(app, KeyCode::Tab);
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn new_app() -> App {
        App::new(GameState::new(), GameOptions::default())
    }

    #[test]
    fn test_arrow_moves_player() {
        let mut app = new_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().player_pos(), Position::new(0, 1));
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.state().player_pos(), Position::new(0, 0));
    }

    #[test]
    fn test_typed_command_sets_feedback() {
        let mut app = new_app();
        type_command(&mut app, "go east");
        assert_eq!(app.feedback(), "You go east.");
        assert_eq!(app.mode(), &UiMode::Normal);
        assert_eq!(app.state().player_pos(), Position::new(0, 1));
    }

    #[test]
    fn test_letters_are_text_in_command_mode() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(
            app.mode(),
            &UiMode::CommandInput {
                input: "l".to_string()
            }
        );
        // 'l' did not move the player
        assert_eq!(app.state().player_pos(), Position::new(0, 0));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.feedback(), "You are on start.");
    }

    #[test]
    fn test_escape_cancels_then_quits() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode(), &UiMode::Normal);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_map_column_width() {
        assert_eq!(map_column_width(5), MIN_MAP_WIDTH);
        assert_eq!(map_column_width(40), 42);
        assert_eq!(map_column_width(70_000), u16::MAX);
        assert_eq!(map_column_width(usize::from(u16::MAX)), u16::MAX);
    }

    #[test]
    fn test_reset_key() {
        let mut app = new_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().player_pos(), Position::new(0, 0));
        assert_eq!(app.state().quest_log().last(), Some("New game started."));
    }
}
