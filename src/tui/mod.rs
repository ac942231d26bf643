//! Terminal front end: rendering, input mapping and the event loop.

pub mod app;
pub mod input;
pub mod layout;
pub mod overlay;
mod terminal;
pub mod ui;

pub use app::App;
pub use input::{Action, Direction};
pub use layout::ScreenLayout;
pub use overlay::OverlayLine;

use crate::config::Theme;
use anyhow::{Context, Result};
use crossterm::event;
use terminal::{CrosstermTerminal, TerminalGuard};
use tracing::{debug, info, instrument};

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub fn run(theme: &Theme) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::mount()?;
    let mut app = App::new();
    run_app(guard.terminal(), &mut app, theme)
}

/// Draw, wait for one event, handle it, repeat.
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App, theme: &Theme) -> Result<()> {
    let mut layout = ScreenLayout::default();

    loop {
        terminal
            .draw(|frame| layout = ui::draw(frame, app, theme))
            .context("Failed to draw frame")?;

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(action) = input::map_event(&event) {
            app.handle(action, &layout);
        } else {
            debug!(?event, "Ignoring event");
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
