//! Language search tab.

use crate::state::{App, SearchField, SearchPanel};
use crate::views::helpers::{border_style, button_row, checkbox_row, text_row, two_column, value_row};
use crate::views::results::ResultArea;
use crate::widgets::WeightGauge;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, panel: &SearchPanel, area: Rect) {
    let (form_area, results_area) = two_column(area, 38);
    let theme = &app.theme;

    let form_block = Block::default()
        .title(panel.header())
        .borders(Borders::ALL)
        .border_style(border_style(panel.cursor.focus != SearchField::Results, theme));
    let inner = form_block.inner(form_area);
    f.render_widget(form_block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(inner);

    let top = Paragraph::new(vec![
        text_row(
            "Query",
            &panel.form.query,
            panel.language.placeholder(),
            panel.cursor.focus == SearchField::Query,
            panel.cursor.editing,
            theme,
        ),
        value_row(
            "Number of results",
            panel.form.size.to_string(),
            panel.cursor.focus == SearchField::Size,
            theme,
        ),
    ]);
    f.render_widget(top, rows[0]);

    let gauge = WeightGauge {
        title: "Vector weight (alpha)".to_string(),
        value: panel.form.alpha(),
        style: Style::default().fg(theme.primary).bg(theme.bg_highlight),
        border_style: border_style(panel.cursor.focus == SearchField::Alpha, theme),
    };
    gauge.render(f, rows[1]);

    let toggles = Paragraph::new(vec![
        checkbox_row(
            "Use Vector Search",
            panel.form.use_vector,
            panel.cursor.focus == SearchField::UseVector,
            theme,
        ),
        checkbox_row(
            "Spelling correction",
            panel.form.use_spelling,
            panel.cursor.focus == SearchField::Spelling,
            theme,
        ),
        button_row("Run Search", panel.cursor.focus == SearchField::Submit, theme),
    ]);
    f.render_widget(toggles, rows[2]);

    let results = ResultArea {
        status: &panel.status,
        notices: &panel.notices,
        selected: panel.cursor.selected,
        focused: panel.cursor.focus == SearchField::Results,
    };
    results.render(f, app, results_area);
}
