//! View rendering dispatch.

pub mod health;
pub mod helpers;
pub mod organization;
pub mod results;
pub mod search;

use crate::nav::View;
use crate::state::{App, Modal};
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(38)])
        .split(layout[1]);

    match app.active_view.language() {
        Some(language) => search::render(f, app, app.search_panel(language), body[0]),
        None => organization::render(f, app, body[0]),
    }
    health::render(f, app, body[1]);

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, app, modal);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = View::all()
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();
    let title = match app.busy {
        Some(label) => format!("HS Finder | {}", label),
        None => "HS Finder".to_string(),
    };
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(app.active_view.index())
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = if app.editing() {
        "typing • Enter submit • Esc stop editing • Tab switch tab"
    } else {
        "j/k move • Enter edit/select • Space toggle • +/- adjust • s search • H health • ? help • q quit"
    };
    let (text, style) = if let Some(label) = app.busy {
        (label.to_string(), Style::default().fg(app.theme.info))
    } else if let Some(note) = app.notifications.last() {
        (
            note.summary(),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(help))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, modal: &Modal) {
    let area = helpers::centered_rect(60, 50, f.size());
    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(modal.message.clone())
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(paragraph, area);
}
