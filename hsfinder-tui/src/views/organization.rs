//! Organization search tab.

use crate::state::{App, OrganizationField};
use crate::types::ORGANIZATION_INDEX;
use crate::views::helpers::{border_style, button_row, text_row, two_column, value_row};
use crate::views::results::ResultArea;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let panel = &app.organization_panel;
    let theme = &app.theme;
    let (form_area, results_area) = two_column(area, 38);

    let form = Paragraph::new(vec![
        text_row(
            "Organization name or abbreviation",
            &panel.form.search_term,
            "UN",
            panel.cursor.focus == OrganizationField::SearchTerm,
            panel.cursor.editing,
            theme,
        ),
        value_row(
            "Number of results",
            panel.form.size.to_string(),
            panel.cursor.focus == OrganizationField::Size,
            theme,
        ),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  Index: {} (fixed)", ORGANIZATION_INDEX),
            Style::default().fg(theme.info),
        )),
        Line::raw(""),
        button_row(
            "Search Organizations",
            panel.cursor.focus == OrganizationField::Submit,
            theme,
        ),
    ])
    .block(
        Block::default()
            .title("Organization Search")
            .borders(Borders::ALL)
            .border_style(border_style(panel.cursor.focus != OrganizationField::Results, theme)),
    );
    f.render_widget(form, form_area);

    let results = ResultArea {
        status: &panel.status,
        notices: &panel.notices,
        selected: panel.cursor.selected,
        focused: panel.cursor.focus == OrganizationField::Results,
    };
    results.render(f, app, results_area);
}
