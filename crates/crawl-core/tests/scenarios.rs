//! End-to-end play-throughs of the reference dungeon
//!
//! Reference layout:
//!
//! ```text
//! S..#.
//! .#I..
//! .IM#.
//! #...E
//! ```

use crawl_core::GameState;
use crawl_core::action::Direction;
use crawl_core::dungeon::{Position, Tile};

#[test]
fn test_go_east_until_the_wall() {
    let mut state = GameState::new();
    assert_eq!(state.process_command("go east"), "You go east.");
    assert_eq!(state.player_pos(), Position::new(0, 1));
    assert_eq!(state.map()[Position::new(0, 1)], Tile::Floor);
    assert_eq!(state.process_command("go east"), "You go east.");
    assert_eq!(state.map()[Position::new(0, 3)], Tile::Wall);
    assert_eq!(state.process_command("go east"), "You can't go that way.");
    assert_eq!(state.player_pos(), Position::new(0, 2));
    assert_eq!(state.quest_log().last(), Some("Bumped into a wall."));
}

#[test]
fn test_fresh_inventory_is_empty() {
    let mut state = GameState::new();
    assert_eq!(state.process_command("inventory"), "Inventory: (empty)");
}

#[test]
fn test_restart_after_play() {
    let mut state = GameState::new();
    let fresh = GameState::new();
    for cmd in ["go south", "go south", "go east", "undo", "go north", "go east"] {
        state.process_command(cmd);
    }
    assert!(!state.inventory().is_empty());

    assert_eq!(state.process_command("restart"), "New game started.");
    assert_eq!(state.player_pos(), state.map().find_start());
    assert!(state.inventory().is_empty());
    assert!(state.undo_history().is_empty());
    assert_eq!(state.revealed(), fresh.revealed());
    assert_eq!(state.map(), fresh.map());
}

#[test]
fn test_collect_item_and_escape() {
    let mut state = GameState::new();
    let route = [
        Direction::East,  // (0,1)
        Direction::East,  // (0,2)
        Direction::South, // (1,2) item
        Direction::East,  // (1,3)
        Direction::East,  // (1,4)
        Direction::South, // (2,4)
        Direction::South, // (3,4) exit
    ];
    for dir in route {
        state.step(dir);
    }
    assert!(state.is_game_over());
    assert_eq!(state.inventory(), ["Mysterious Item"]);
    assert!(
        state
            .log_tail(3)
            .iter()
            .any(|e| e == "You found the exit! Game over. Press Play Again.")
    );

    // frozen until restart
    assert_eq!(state.process_command("go north"), "You can't go that way.");
    state.process_command("play again");
    assert!(!state.is_game_over());
    assert_eq!(state.process_command("go south"), "You go south.");
}

#[test]
fn test_monster_ends_the_run() {
    let mut state = GameState::new();
    for cmd in ["go south", "go south", "go east"] {
        state.process_command(cmd);
    }
    assert_eq!(state.inventory().len(), 1);
    assert_eq!(state.process_command("go east"), "You go east.");
    assert!(state.is_game_over());
    assert!(state.log_tail(6).iter().any(|e| e == "The Monster Ate you"));
    assert_eq!(state.process_command("look"), "You are on monster.");
}

#[test]
fn test_log_tail_view() {
    let mut state = GameState::new();
    for _ in 0..4 {
        state.step(Direction::South);
        state.step(Direction::North);
    }
    let tail = state.log_tail(3);
    assert_eq!(tail.len(), 3);
    assert_eq!(tail[2], "Monster growls in the distance.");
    assert!(state.quest_log().len() > 3);
}
