//! Terminal UI rendering for the eisen TUI.
//!
//! Design philosophy follows the board it replaces:
//! - 2×2 quadrant grid filling the terminal, one pane per priority pairing
//! - Minimal chrome: whitespace and typography instead of box drawing
//! - Bottom status line doubles as the new-task form
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state. This enables the decoupled game loop.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::render::{QuadrantView, RenderState, TaskView};
use crate::task::Quadrant;
use crate::tea::{InputKind, Mode, Notification, NotificationLevel, TimerState};

// Color tokens (selection uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;

// Quadrant accent colors, one per pane title
const COLOR_DO_FIRST: Color = Color::Red;
const COLOR_SCHEDULE: Color = Color::Yellow;
const COLOR_DELEGATE: Color = Color::Cyan;
const COLOR_ELIMINATE: Color = Color::DarkGray;

// Timer glyphs shown next to a task name
const GLYPH_TIMER_RUNNING: &str = "▶";
const GLYPH_TIMER_PAUSED: &str = "⏸";

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    render_main_layout(frame, state);

    // Render notification if present
    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, frame.area());
    }
}

/// Render the main layout: quadrant grid + separator + status bar.
fn render_main_layout(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    if area.height < 4 {
        render_statusbar(frame, state, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_grid(frame, state, chunks[0]);
    render_separator(frame, chunks[1]);
    render_statusbar(frame, state, chunks[2]);
}

/// Render the 2×2 quadrant grid.
///
/// Pane positions follow [`Quadrant::ALL`]: urgent-important top-left,
/// not-urgent-important top-right, urgent-not-important bottom-left,
/// not-urgent-not-important bottom-right.
fn render_grid(frame: &mut Frame, state: &RenderState, area: Rect) {
    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    let panes = [top[0], top[1], bottom[0], bottom[1]];

    for (view, pane) in state.quadrants.iter().zip(panes) {
        let focused = view.quadrant == state.focus;
        render_quadrant(frame, view, focused, state.selected, pane);
    }
}

/// Render one quadrant pane: title line plus its task rows.
fn render_quadrant(
    frame: &mut Frame,
    view: &QuadrantView,
    focused: bool,
    selected: usize,
    area: Rect,
) {
    if area.height == 0 {
        return;
    }

    let content_height = area.height.saturating_sub(1) as usize;

    // Window the rows so the selection stays visible in short panes
    let start = if focused && content_height > 0 {
        selected.saturating_sub(content_height - 1)
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::with_capacity(content_height + 1);
    lines.push(render_quadrant_title(view, focused, area.width));
    lines.extend(
        view.tasks
            .iter()
            .enumerate()
            .skip(start)
            .take(content_height)
            .map(|(idx, task)| render_task_row(task, focused && idx == selected, area.width)),
    );

    frame.render_widget(Paragraph::new(lines), area);
}

/// Title line: accent-colored label, dim count.
fn render_quadrant_title(view: &QuadrantView, focused: bool, width: u16) -> Line<'static> {
    let accent = quadrant_color(view.quadrant);
    let title_style = if focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    let title = truncate(view.quadrant.title(), width as usize);
    let mut spans = vec![Span::styled(title, title_style)];
    if !view.tasks.is_empty() {
        spans.push(Span::styled(
            format!(" {}", view.tasks.len()),
            Style::default().fg(COLOR_TEXT_MUTED),
        ));
    }
    Line::from(spans)
}

/// Render a single task row: two-space indent, name, timer glyph.
fn render_task_row(task: &TaskView, is_selected: bool, width: u16) -> Line<'static> {
    let name_style = if is_selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let glyph = match task.timer {
        Some(TimerState::Running) => Some((GLYPH_TIMER_RUNNING, Color::Green)),
        Some(TimerState::Paused) => Some((GLYPH_TIMER_PAUSED, Color::Yellow)),
        None => None,
    };

    let glyph_width = if glyph.is_some() { 2 } else { 0 };
    let name_width = (width as usize).saturating_sub(2 + glyph_width);
    let name = truncate(&task.name, name_width);

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(name, name_style),
    ];
    if let Some((glyph, color)) = glyph {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    Line::from(spans)
}

fn quadrant_color(quadrant: Quadrant) -> Color {
    match quadrant {
        Quadrant::UrgentImportant => COLOR_DO_FIRST,
        Quadrant::NotUrgentImportant => COLOR_SCHEDULE,
        Quadrant::UrgentNotImportant => COLOR_DELEGATE,
        Quadrant::NotUrgentNotImportant => COLOR_ELIMINATE,
    }
}

/// Render the separator - solid divider line between grid and status bar.
fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar - single bottom line with conditional display.
/// Shows either the new-task form, the delete confirmation, or the keymap.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let line = match state.mode {
        Mode::Input(InputKind::Confirm) => render_confirm_line(state),
        Mode::Input(kind) => render_form_line(state, kind),
        Mode::List => render_keymap_line(state),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render keybindings legend for the bottom line.
/// When show_keymap is false: Shows just "?" (grayed out)
/// When show_keymap is true: Shows "? │ <full keymap legend>" with bright "?"
fn render_keymap_line(state: &RenderState) -> Line<'static> {
    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let help_style = if state.show_keymap {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    let mut spans: Vec<Span> = vec![Span::styled("?", help_style)];

    if state.show_keymap {
        let groups: &[&[(&str, &str)]] = &[
            &[("h/l", "quadrant"), ("j/k", "task")],
            &[("n", "new"), ("d", "delete"), ("r", "reload")],
            &[("t", "timer"), ("p", "pause")],
            &[("q", "quit")],
        ];
        for group in groups {
            spans.push(Span::styled(" │ ", sep_style));
            for (key_idx, (key, desc)) in group.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(*key, key_style));
                spans.push(Span::styled(format!(" {}", desc), desc_style));
            }
        }
    }

    Line::from(spans)
}

/// Render the new-task form on the bottom line.
///
/// Three fields: name text plus the two priority checkboxes. The focused
/// field is bright; Tab moves focus, Space toggles a checkbox, Enter
/// submits from any field.
fn render_form_line(state: &RenderState, kind: InputKind) -> Line<'static> {
    let hint_style = Style::default().fg(COLOR_TEXT_MUTED);
    let focused_style = Style::default().fg(Color::White);
    let blurred_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let cursor_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut spans: Vec<Span> = vec![
        Span::styled("Enter ", hint_style),
        Span::styled("• ", hint_style),
        Span::styled("Tab ", hint_style),
        Span::styled("• ", hint_style),
        Span::styled("Esc ", hint_style),
        Span::styled("  ", hint_style),
    ];

    // Name field
    let name_style = if kind == InputKind::Name {
        focused_style
    } else {
        blurred_style
    };
    spans.push(Span::styled("Name: ", name_style));
    spans.push(Span::styled(state.input_buffer.clone(), name_style));
    if kind == InputKind::Name {
        spans.push(Span::styled("_", cursor_style));
    }

    // Checkbox fields
    for (field, label, checked) in [
        (InputKind::Urgent, "urgent", state.urgent),
        (InputKind::Important, "important", state.important),
    ] {
        let style = if kind == field { focused_style } else { blurred_style };
        spans.push(Span::styled(
            format!("  {} {}", checkbox(checked), label),
            style,
        ));
    }

    Line::from(spans)
}

/// Render the delete confirmation prompt on the bottom line.
fn render_confirm_line(state: &RenderState) -> Line<'static> {
    let hint_style = Style::default().fg(COLOR_TEXT_MUTED);
    let prompt = match &state.confirm_name {
        Some(name) => format!("Delete '{}'?", name),
        None => "Delete?".to_string(),
    };

    Line::from(vec![
        Span::styled("Enter ", hint_style),
        Span::styled("• ", hint_style),
        Span::styled("Esc ", hint_style),
        Span::styled("  ", hint_style),
        Span::styled(prompt, Style::default().fg(Color::Red)),
    ])
}

/// Render notification message on the bottom line of the screen.
///
/// Displays a single-line notification with appropriate styling based on the notification level:
/// - Error: Red text with "Error:" prefix and bold styling
/// - Info: Green text without prefix
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}

// Helper functions

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}~", truncated)
    }
}
