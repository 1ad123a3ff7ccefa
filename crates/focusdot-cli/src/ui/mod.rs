//! UI rendering.
//!
//! One full-screen timer view: phase label, countdown, progress dots and
//! a key-hint bar, with an input popover layered on top while a duration
//! is being edited.

pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use focusdot_core::{format_mmss, Phase};

use crate::app::{App, DurationField};
use theme::Theme;

/// Block cursor character for the duration editor.
const BLOCK_CURSOR: &str = "█";

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = theme::theme(app.dark_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Center the timer column vertically.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // phase label
            Constraint::Length(1),
            Constraint::Length(1), // countdown
            Constraint::Length(1),
            Constraint::Length(1), // dots
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(area);

    draw_phase_label(frame, rows[1], app, theme);
    draw_countdown(frame, rows[3], app, theme);
    draw_dots(frame, rows[5], app, theme);
    draw_hints(frame, rows[7], app, theme);

    if app.editing.is_some() {
        draw_duration_editor(frame, app, theme);
    }
}

fn draw_phase_label(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let label = match app.engine.phase() {
        Phase::Session => "Session",
        Phase::Break => "Break",
    };
    let line = Line::from(Span::styled(label, Style::default().fg(theme.muted))).centered();
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_countdown(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let line = Line::from(Span::styled(
        format_mmss(app.engine.remaining_secs()),
        style,
    ))
    .centered();
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_dots(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let count = app.engine.durations().sessions_per_cycle;
    // The engine's dot rule is a relative increment; clamp for display.
    let active = app.engine.dot_index().min(count.saturating_sub(1));

    let mut spans = Vec::new();
    for index in 0..count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if index == active {
            theme.dot_active
        } else {
            theme.dot
        };
        spans.push(Span::styled("●", Style::default().fg(color)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let key = Style::default().fg(theme.key).bold();
    let text = Style::default().fg(theme.muted);

    let mut spans = vec![
        Span::styled("space", key),
        Span::styled(
            if app.engine.is_running() {
                " stop  "
            } else {
                " start  "
            },
            text,
        ),
        Span::styled("r", key),
        Span::styled(" reset  ", text),
        Span::styled("t", key),
        Span::styled(" theme  ", text),
    ];
    if !app.engine.is_running() {
        spans.extend([
            Span::styled("f", key),
            Span::styled(" flow  ", text),
            Span::styled("b", key),
            Span::styled(" break  ", text),
        ]);
    }
    spans.extend([Span::styled("q", key), Span::styled(" quit", text)]);

    if app.engine.is_running() {
        spans.push(Span::styled("   ● running", Style::default().fg(theme.running)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

fn draw_duration_editor(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(input) = &app.editing else {
        return;
    };
    let title = match input.field {
        DurationField::Session => "Flow Duration",
        DurationField::Break => "Break Duration",
    };

    let area = centered_rect(34, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.text).bold(),
        ))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(vec![
            Span::styled("› ", Style::default().fg(theme.muted)),
            Span::styled(input.buffer.as_str(), Style::default().fg(theme.text)),
            Span::styled(BLOCK_CURSOR, Style::default().fg(theme.text)),
            Span::styled(" minutes", Style::default().fg(theme.muted)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.key).bold()),
            Span::styled(" save  ", Style::default().fg(theme.muted)),
            Span::styled("Esc", Style::default().fg(theme.key).bold()),
            Span::styled(" cancel", Style::default().fg(theme.muted)),
        ]),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// A fixed-size rect centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
