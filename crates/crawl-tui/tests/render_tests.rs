use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crawl_core::GameState;
use crawl_core::world::GameOptions;
use crawl_tui::App;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_fresh_screen_shows_hud() {
    let app = App::new(GameState::new(), GameOptions::default());
    let text = screen_text(&app);
    assert!(text.contains("Inventory"));
    assert!(text.contains("(empty)"));
    assert!(text.contains("Entered the dungeon."));
    assert!(text.contains('@'));
}

#[test]
fn test_game_over_banner() {
    let state = GameState::with_template(&["SE"]).unwrap();
    let mut app = App::new(state, GameOptions::default());
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
    assert!(app.state().is_game_over());
    let text = screen_text(&app);
    assert!(text.contains("r to play again"));
}
