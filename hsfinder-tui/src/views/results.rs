//! Result area shared by the search and organization tabs.

use crate::controller::PanelStatus;
use crate::notifications::Notification;
use crate::render::{DisplayBlock, NO_RESULTS};
use crate::state::App;
use crate::theme::notification_color;
use crate::views::helpers::{border_style, two_column};
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub struct ResultArea<'a> {
    pub status: &'a PanelStatus,
    pub notices: &'a [Notification],
    pub selected: Option<usize>,
    pub focused: bool,
}

impl<'a> ResultArea<'a> {
    pub fn render(&self, f: &mut Frame<'_>, app: &App, area: Rect) {
        let notice_height = (self.notices.len() as u16).clamp(1, 4) + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(notice_height), Constraint::Min(0)])
            .split(area);

        let lines: Vec<Line> = self
            .notices
            .iter()
            .map(|n| {
                Line::from(Span::styled(
                    n.message.clone(),
                    Style::default().fg(notification_color(n.level, &app.theme)),
                ))
            })
            .collect();
        let notices = Paragraph::new(lines)
            .block(Block::default().title("Status").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(notices, chunks[0]);

        match self.status {
            PanelStatus::Idle => self.message(f, app, chunks[1], "Submit the form to see results.", app.theme.text_dim),
            PanelStatus::Warning(message) => self.message(f, app, chunks[1], message, app.theme.warning),
            PanelStatus::Failed(message) => self.message(f, app, chunks[1], message, app.theme.error),
            PanelStatus::Results(rendered) if rendered.is_empty() => {
                self.message(f, app, chunks[1], NO_RESULTS, app.theme.info)
            }
            PanelStatus::Results(rendered) => self.blocks(f, app, chunks[1], &rendered.blocks),
        }
    }

    fn message(&self, f: &mut Frame<'_>, app: &App, area: Rect, text: &str, color: ratatui::style::Color) {
        let paragraph = Paragraph::new(text.to_string())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Results")
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focused, &app.theme)),
            );
        f.render_widget(paragraph, area);
    }

    fn blocks(&self, f: &mut Frame<'_>, app: &App, area: Rect, blocks: &[DisplayBlock]) {
        let (list_area, detail_area) = two_column(area, 40);

        let items: Vec<ListItem> = blocks
            .iter()
            .map(|block| ListItem::new(block.heading()))
            .collect();
        let mut state = ListState::default();
        state.select(self.selected);
        let list = List::new(items)
            .block(
                Block::default()
                    .title("Results")
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focused, &app.theme)),
            )
            .highlight_style(
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, list_area, &mut state);

        if let Some(block) = self.selected.and_then(|idx| blocks.get(idx)) {
            let detail = DetailPanel {
                title: block.heading(),
                block,
                label_style: Style::default().fg(app.theme.secondary),
                border_style: Style::default().fg(app.theme.border),
            };
            detail.render(f, detail_area);
        }
    }
}
