//! UI rendering for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Widget},
    Frame,
};

use crate::features::focus::{render_progress_bar, SessionKind};
use crate::features::fog::MAX_FOG_STEPS;
use crate::features::settings::SettingsField;
use crate::tui::app::{App, Mode};
use crate::widget::WidgetView;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let view = app.widget.view();

    let page = if app.mini_bar_visible() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Mini control bar
                Constraint::Min(0),    // Tasks
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        render_mini_bar(frame, &view, chunks[0]);
        render_tasks(frame, app, chunks[1]);
        render_status_bar(frame, app, chunks[2]);
        chunks[1]
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Session label
                Constraint::Length(5), // Dial
                Constraint::Length(3), // Session tracker
                Constraint::Min(0),    // Tasks
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        render_header(frame, &view, chunks[0]);
        render_dial(frame, &view, chunks[1]);
        render_tracker(frame, &view, chunks[2]);
        render_tasks(frame, app, chunks[3]);
        render_status_bar(frame, app, chunks[4]);
        Rect::new(
            chunks[1].x,
            chunks[1].y,
            chunks[1].width,
            chunks[1].height + chunks[2].height + chunks[3].height,
        )
    };

    if view.fog_visible {
        frame.render_widget(FogOverlay::new(app.widget.fog().steps()), page);
    }

    if app.mode == Mode::Settings {
        render_settings(frame, app);
    }
}

fn session_color(session: SessionKind) -> Color {
    match session {
        SessionKind::Focus => Color::Red,
        SessionKind::ShortBreak => Color::Green,
        SessionKind::LongBreak => Color::Blue,
    }
}

/// Render the session label.
fn render_header(frame: &mut Frame<'_>, view: &WidgetView, area: Rect) {
    let state = if view.is_running { "running" } else { "paused" };
    let title = format!(" {} ({state}) ", view.session);

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(session_color(view.session))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time and the half-dial progress.
fn render_dial(frame: &mut Frame<'_>, view: &WidgetView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(session_color(view.session)))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label(Span::styled(
            view.time_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[0]);

    let width = usize::from(rows[1].width.saturating_sub(12));
    let arc = format!(
        "{} {:>3.0}°",
        render_progress_bar(view.progress, width),
        view.progress_degrees
    );
    frame.render_widget(
        Paragraph::new(arc).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
}

/// Render the completed focus session indicators.
fn render_tracker(frame: &mut Frame<'_>, view: &WidgetView, area: Rect) {
    let spans: Vec<Span<'_>> = view
        .tracker
        .iter()
        .map(|filled| {
            if *filled {
                Span::styled("■ ", Style::default().fg(Color::Red))
            } else {
                Span::styled("□ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let tracker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Sessions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(tracker, area);
}

/// Render the one-line control bar shown once the dial scrolls away.
fn render_mini_bar(frame: &mut Frame<'_>, view: &WidgetView, area: Rect) {
    let icon = if view.is_running { "▶" } else { "⏸" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {icon} {} ", view.time_text),
            Style::default()
                .fg(session_color(view.session))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " space:start/pause  r:reset",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}

/// Render the task list.
fn render_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let (icon, color) = if task.done {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::White)
            };

            let text_style = if task.done {
                Style::default().add_modifier(Modifier::CROSSED_OUT)
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(task.text.as_str(), text_style),
                Span::styled(
                    format!("  {}", task.added_at.format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        " Tasks ({}/{}) ",
        app.tasks.completed_count(),
        app.tasks.len()
    );
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    if !app.tasks.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar, or the task input line while typing.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = if app.mode == Mode::AddingTask {
        Paragraph::new(format!("New task: {}_", app.input)).style(Style::default().fg(Color::Yellow))
    } else {
        let text = app.status.as_deref().unwrap_or(
            "space:start/pause | r:reset | s:settings | a:add | ?:help | q:quit",
        );
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(status, area);
}

/// Render the settings modal on top of the page.
fn render_settings(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(50, 9, frame.area());

    let lines: Vec<Line<'_>> = SettingsField::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.settings_field;
            let value_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::raw(format!("{:<26}", field.label())),
                Span::styled(format!("{}{cursor}", app.settings_form.field(*field)), value_style),
            ])
        })
        .collect();

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings (Enter:save  Esc:close) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A rectangle of the given size centered in `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Shades a share of the cells in an area proportional to the fog level.
pub struct FogOverlay {
    steps: u8,
}

impl FogOverlay {
    #[must_use]
    pub const fn new(steps: u8) -> Self {
        Self { steps }
    }

    /// Whether the cell at (x, y) is covered. The pattern is stable, so a
    /// cell covered at one level stays covered at every higher level.
    #[must_use]
    pub fn covers(&self, x: u16, y: u16) -> bool {
        let slot = (u32::from(x) * 7 + u32::from(y) * 13) % u32::from(MAX_FOG_STEPS);
        slot < u32::from(self.steps)
    }
}

impl Widget for FogOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if !self.covers(x, y) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("░").set_fg(Color::DarkGray);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(60, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contains(buf: &Buffer, needle: &str) -> bool {
        let area = buf.area;
        (area.top()..area.bottom()).any(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect();
            row.contains(needle)
        })
    }

    #[test]
    fn test_fog_overlay_coverage() {
        let clear = FogOverlay::new(0);
        let full = FogOverlay::new(MAX_FOG_STEPS);
        let some = FogOverlay::new(2);

        let mut covered = 0;
        for y in 0..10 {
            for x in 0..10 {
                assert!(!clear.covers(x, y));
                assert!(full.covers(x, y));
                if some.covers(x, y) {
                    covered += 1;
                }
            }
        }
        assert_eq!(covered, 40);
    }

    #[test]
    fn test_render_shows_timer_and_label() {
        let app = App::new(Config::default().applied(), 8);
        let buf = draw(&app);

        assert!(contains(&buf, "25:00"));
        assert!(contains(&buf, "Focus Session"));
        assert!(contains(&buf, "Tasks (0/0)"));
    }

    #[test]
    fn test_render_mini_bar_when_scrolled() {
        let mut app = App::new(Config::default().applied(), 2);
        app.scroll_down(3);
        let buf = draw(&app);

        assert!(contains(&buf, "25:00"));
        assert!(contains(&buf, "space:start/pause  r:reset"));
        assert!(!contains(&buf, "Sessions"));
    }

    #[test]
    fn test_render_settings_modal() {
        let mut app = App::new(Config::default().applied(), 8);
        app.open_settings();
        let buf = draw(&app);

        assert!(contains(&buf, "Settings"));
        assert!(contains(&buf, "Fog decrease every (min)"));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(50, 9, area);
        assert_eq!(rect, area);
    }
}
