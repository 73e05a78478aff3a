//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::core::Visibility;
use crate::error::PomofogError;
use crate::tui::app::{App, Mode};

/// Rows moved per page key or wheel notch.
const SCROLL_STEP: u16 = 3;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset the timer.
    Reset,
    /// Save the settings form.
    SaveSettings,
    /// The terminal gained or lost focus.
    Visibility(Visibility),
}

/// Wait up to `timeout` for a terminal event.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn next_event(timeout: Duration) -> Result<Option<Event>, PomofogError> {
    if event::poll(timeout)
        .map_err(|e| PomofogError::Terminal(format!("Event poll failed: {e}")))?
    {
        let event = event::read()
            .map_err(|e| PomofogError::Terminal(format!("Event read failed: {e}")))?;
        return Ok(Some(event));
    }
    Ok(None)
}

/// Handle one terminal event.
///
/// Returns an action to take, or None if no action is needed.
pub fn handle_event(app: &mut App, event: &Event) -> Option<Action> {
    match event {
        Event::FocusLost => Some(Action::Visibility(Visibility::Hidden)),
        Event::FocusGained => Some(Action::Visibility(Visibility::Visible)),
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_down(SCROLL_STEP),
                MouseEventKind::ScrollUp => app.scroll_up(SCROLL_STEP),
                _ => {}
            }
            None
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        _ => None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        Mode::Normal => handle_normal_key(app, key),
        Mode::AddingTask => {
            handle_task_key(app, key);
            None
        }
        Mode::Settings => handle_settings_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Timer
        KeyCode::Char(' ') => return Some(Action::Toggle),
        KeyCode::Char('r' | 'R') | KeyCode::Enter => return Some(Action::Reset),
        KeyCode::Char('s') => app.open_settings(),

        // Tasks - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('a') => app.begin_task_input(),
        KeyCode::Char('x') => app.toggle_selected_task(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_task(),

        // Page
        KeyCode::PageDown => app.scroll_down(SCROLL_STEP),
        KeyCode::PageUp => app.scroll_up(SCROLL_STEP),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "space:start/pause | r:reset | s:settings | a:add | x:done | d:delete | q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }
    None
}

fn handle_task_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_task_input(),
        KeyCode::Esc => app.cancel_task_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => return Some(Action::SaveSettings),
        KeyCode::Esc => app.close_settings(),
        KeyCode::Tab | KeyCode::Down => app.settings_field = app.settings_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.settings_field = app.settings_field.previous(),
        KeyCode::Backspace => {
            app.settings_form.field_mut(app.settings_field).pop();
        }
        KeyCode::Char(c) => app.settings_form.field_mut(app.settings_field).push(c),
        _ => {}
    }
    None
}
