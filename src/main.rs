// src/main.rs
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use fmtui::app::App;
use fmtui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let mut app = App::new(start_dir);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

// logging goes to a file, and only when asked for: writing to the terminal
// would fight the TUI for the screen
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create("fmtui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
