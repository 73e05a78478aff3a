//! Application state for the TUI.

use std::time::Instant;

use crate::core::Visibility;
use crate::features::focus::Transition;
use crate::features::settings::{AppliedSettings, SettingsField, SettingsForm};
use crate::features::tasks::TaskList;
use crate::widget::FocusWidget;

/// Rows the page can scroll past the mini bar threshold.
const SCROLL_SLACK_ROWS: u16 = 8;

/// Which input surface has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Timer and task list shortcuts.
    Normal,
    /// Typing a new task.
    AddingTask,
    /// Settings modal is open.
    Settings,
}

/// Application state.
pub struct App {
    /// Timer and fog.
    pub widget: FocusWidget,
    /// Task entries.
    pub tasks: TaskList,
    /// Currently selected task index.
    pub selected: usize,
    /// Current input mode.
    pub mode: Mode,
    /// Draft text of the task being typed.
    pub input: String,
    /// Settings modal fields.
    pub settings_form: SettingsForm,
    /// Focused settings field.
    pub settings_field: SettingsField,
    /// Page scroll offset in rows.
    pub scroll: u16,
    /// Scroll offset past which the mini control bar is shown.
    pub mini_bar_threshold: u16,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(settings: AppliedSettings, mini_bar_threshold: u16) -> Self {
        Self {
            widget: FocusWidget::new(settings),
            tasks: TaskList::new(),
            selected: 0,
            mode: Mode::Normal,
            input: String::new(),
            settings_form: SettingsForm::from_applied(&settings),
            settings_field: SettingsField::Focus,
            scroll: 0,
            mini_bar_threshold,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Advance the widget to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(transition) = self.widget.poll(now) {
            self.on_transition(transition);
        }
    }

    fn on_transition(&mut self, transition: Transition) {
        self.status = Some(format!("{} started", transition.to));
    }

    /// Start or pause the timer.
    pub fn toggle_timer(&mut self, now: Instant) {
        self.widget.toggle(now);
        self.status = Some(if self.widget.timer().is_running() {
            "Started".to_string()
        } else {
            "Paused".to_string()
        });
    }

    /// Reset the timer.
    pub fn reset_timer(&mut self) {
        self.widget.reset();
        self.status = Some("Reset".to_string());
    }

    /// Forward a terminal focus change.
    pub fn set_visibility(&mut self, visibility: Visibility, now: Instant) {
        self.widget.set_visibility(visibility, now);
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
    }

    /// Begin typing a new task.
    pub fn begin_task_input(&mut self) {
        self.input.clear();
        self.mode = Mode::AddingTask;
    }

    /// Add the drafted task and leave input mode.
    pub fn commit_task_input(&mut self) {
        if self.tasks.add(&self.input).is_some() {
            self.selected = self.tasks.len() - 1;
            self.status = Some(format!("Added: {}", self.input.trim()));
        }
        self.input.clear();
        self.mode = Mode::Normal;
    }

    /// Drop the draft and leave input mode.
    pub fn cancel_task_input(&mut self) {
        self.input.clear();
        self.mode = Mode::Normal;
    }

    /// Flip the checkbox of the selected task.
    pub fn toggle_selected_task(&mut self) {
        if let Some(id) = self.tasks.get(self.selected).map(|t| t.id) {
            self.tasks.toggle(id);
        }
    }

    /// Delete the selected task.
    pub fn delete_selected_task(&mut self) {
        let Some(task) = self.tasks.get(self.selected) else {
            return;
        };
        let (id, text) = (task.id, task.text.clone());
        self.tasks.remove(id);
        self.status = Some(format!("Deleted: {text}"));

        if !self.tasks.is_empty() && self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }
    }

    /// Open the settings modal pre-filled with the current values.
    pub fn open_settings(&mut self) {
        self.settings_form = SettingsForm::from_applied(&self.widget.settings());
        self.settings_field = SettingsField::Focus;
        self.mode = Mode::Settings;
    }

    /// Close the settings modal without saving.
    pub fn close_settings(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Normalize the form, apply it and close the modal.
    pub fn save_settings(&mut self) {
        let applied = self.settings_form.normalize();
        self.widget.apply_settings(applied);
        self.mode = Mode::Normal;
        self.status = Some("Settings saved".to_string());
    }

    /// Scroll the page down.
    pub fn scroll_down(&mut self, rows: u16) {
        let max = self.mini_bar_threshold.saturating_add(SCROLL_SLACK_ROWS);
        self.scroll = self.scroll.saturating_add(rows).min(max);
    }

    /// Scroll the page up.
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// The dial has scrolled away and the mini control bar is shown.
    #[must_use]
    pub const fn mini_bar_visible(&self) -> bool {
        self.scroll > self.mini_bar_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> App {
        App::new(Config::default().applied(), 8)
    }

    #[test]
    fn test_task_input_flow() {
        let mut app = app();
        app.begin_task_input();
        assert_eq!(app.mode, Mode::AddingTask);

        app.input.push_str("  review notes ");
        app.commit_task_input();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().text, "review notes");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_blank_task_is_ignored() {
        let mut app = app();
        app.begin_task_input();
        app.input.push_str("   ");
        app.commit_task_input();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_delete_keeps_selection_in_bounds() {
        let mut app = app();
        app.tasks.add("a");
        app.tasks.add("b");
        app.select_next();
        assert_eq!(app.selected, 1);

        app.delete_selected_task();
        assert_eq!(app.selected, 0);
        assert_eq!(app.tasks.len(), 1);

        app.delete_selected_task();
        app.delete_selected_task();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_toggle_selected_task() {
        let mut app = app();
        app.tasks.add("a");
        app.toggle_selected_task();
        assert!(app.tasks.get(0).unwrap().done);
    }

    #[test]
    fn test_save_settings_applies_and_normalizes() {
        let mut app = app();
        app.open_settings();
        assert_eq!(app.settings_form.focus, "25");

        app.settings_form.focus = "1".to_string();
        app.settings_form.short_break = "x".to_string();
        app.settings_form.long_break = "1".to_string();
        app.save_settings();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.widget.timer().time_left_seconds(), 60);
        assert_eq!(app.widget.settings().durations.short_break_seconds, 60);
        assert_eq!(app.settings_form.short_break, "1");
    }

    #[test]
    fn test_close_settings_discards_edits() {
        let mut app = app();
        app.open_settings();
        app.settings_form.focus = "1".to_string();
        app.close_settings();
        assert_eq!(app.widget.timer().time_left_seconds(), 1500);
    }

    #[test]
    fn test_mini_bar_threshold() {
        let mut app = app();
        app.scroll_down(8);
        assert!(!app.mini_bar_visible());
        app.scroll_down(1);
        assert!(app.mini_bar_visible());
        app.scroll_down(100);
        assert_eq!(app.scroll, 16);
        app.scroll_up(100);
        assert_eq!(app.scroll, 0);
    }
}
