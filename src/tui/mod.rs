//! Terminal User Interface (TUI) for pomofog.
//!
//! Shows the session timer, the focus fog and the task list in an
//! interactive terminal page. Built with ratatui and crossterm; terminal
//! focus changes stand in for page visibility.

mod app;
mod event;
mod ui;

pub use app::{App, Mode};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::TuiConfig;
use crate::error::PomofogError;
use crate::features::settings::AppliedSettings;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(settings: AppliedSettings, tui: &TuiConfig) -> Result<(), PomofogError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomofogError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .map_err(|e| PomofogError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomofogError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(settings, tui.mini_bar_threshold_rows);
    info!("TUI started");
    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(tui.tick_rate_ms.max(1)),
    );

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    info!("TUI stopped");

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), PomofogError> {
    while !app.should_quit {
        // Fire due callbacks before drawing
        app.tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomofogError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        let Some(ev) = event::next_event(tick_rate)? else {
            continue;
        };
        if let Some(action) = event::handle_event(app, &ev) {
            let now = Instant::now();
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Toggle => app.toggle_timer(now),
                event::Action::Reset => app.reset_timer(),
                event::Action::SaveSettings => app.save_settings(),
                event::Action::Visibility(visibility) => app.set_visibility(visibility, now),
            }
        }
    }

    Ok(())
}
