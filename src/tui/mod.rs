//! Terminal UI for browsing artworks

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::api::ArtworkSource;
use crate::config::ArtgridConfig;

pub use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits
pub fn run(config: &ArtgridConfig, source: Arc<dyn ArtworkSource>) -> Result<()> {
    let mut terminal = setup_terminal()?;

    let mut app = App::new(source, config);
    info!(
        "Starting TUI on page {} with source {}",
        config.tui.start_page,
        app.source_name()
    );
    app.go_to_page(config.tui.start_page);

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    restore_terminal(&mut terminal)?;

    if app.selection_count() > 0 {
        info!("Exiting with selected ids: {:?}", app.selection.ids());
    }

    result
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.poll_fetch();
        terminal.draw(|frame| ui::render(frame, app))?;
        event::handle_events(app)?;
    }
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
