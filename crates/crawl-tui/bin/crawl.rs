//! Crawl: a tiny fog-of-war dungeon explorer
//!
//! Main entry point for the game.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crawl_core::GameState;
use crawl_core::world::GameOptions;
use crawl_tui::App;

/// Options file looked up in the home directory when no --config is given
const RC_FILE: &str = ".crawlrc";

/// Crawl dungeon explorer
#[derive(Parser, Debug)]
#[command(name = "crawl")]
#[command(author, version, about = "Crawl - explore the dungeon, find the exit!", long_about = None)]
struct Args {
    /// Options file (defaults to ~/.crawlrc when present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Read commands from stdin, one per line, instead of opening the UI
    #[arg(long = "batch")]
    batch: bool,

    /// With --batch, print the final game state as JSON
    #[arg(long = "json", requires = "batch")]
    json: bool,

    /// Append log output to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colors
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref(), args.verbose, args.batch)?;

    let options = load_options(&args)?;
    let state = GameState::from_options(&options).context("building the dungeon")?;
    info!(
        "starting {}x{} dungeon",
        state.map().rows(),
        state.map().cols()
    );

    if args.batch {
        run_batch(state, args.json)
    } else {
        run_tui(App::new(state, options))
    }
}

/// Set up env_logger. Without a log file the interactive UI stays silent
/// unless RUST_LOG asks otherwise, since stderr shares the screen.
fn init_logging(log_file: Option<&Path>, verbosity: u8, batch: bool) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.parse_default_env();

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if !batch && std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Off);
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

fn load_options(args: &Args) -> anyhow::Result<GameOptions> {
    let path = args.config.clone().or_else(|| {
        dirs::home_dir()
            .map(|home| home.join(RC_FILE))
            .filter(|path| path.exists())
    });

    let mut options = match path {
        Some(path) => GameOptions::load_from_file(&path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => GameOptions::default(),
    };
    if args.no_color {
        options.color = false;
    }
    Ok(options)
}

/// Headless play: each stdin line is one typed command
fn run_batch(mut state: GameState, json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let feedback = state.process_command(&line?);
        if !feedback.is_empty() {
            writeln!(out, "{}", feedback)?;
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    }
    Ok(())
}

fn run_tui(mut app: App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}
