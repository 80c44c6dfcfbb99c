//! Common view rendering helpers.

use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Split `area` into a left column of `left_percent` and the remainder.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Rectangle of the given percentage size centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub fn border_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.border_focus)
    } else {
        Style::default().fg(theme.border)
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "> "
    } else {
        "  "
    }
}

fn row_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default()
            .fg(theme.primary)
            .bg(theme.bg_highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    }
}

/// Text input row. An empty value shows `placeholder` dimmed.
pub fn text_row(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    editing: bool,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{}{}: ", marker(focused), label),
        row_style(focused, theme),
    )];
    if value.is_empty() && !editing {
        spans.push(Span::styled(
            format!("e.g. {}", placeholder),
            Style::default().fg(theme.text_dim),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), Style::default().fg(theme.text)));
    }
    if editing {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

pub fn value_row(label: &str, value: String, focused: bool, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}{}: ", marker(focused), label), row_style(focused, theme)),
        Span::raw(value),
    ])
}

pub fn checkbox_row(label: &str, checked: bool, focused: bool, theme: &Theme) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(Span::styled(
        format!("{}{} {}", marker(focused), mark, label),
        row_style(focused, theme),
    ))
}

pub fn button_row(label: &str, focused: bool, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}[ {} ]", marker(focused), label),
        row_style(focused, theme),
    ))
}
