//! Detail panel widget for showing field/value pairs and nested sections.

use crate::render::DisplayBlock;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    pub title: String,
    pub block: &'a DisplayBlock,
    pub label_style: Style,
    pub border_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = self
            .block
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.label_style),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();

        for section in &self.block.sections {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("{}:", section.title),
                self.label_style.add_modifier(Modifier::BOLD),
            )));
            lines.extend(section.lines.iter().map(|l| Line::raw(l.as_str())));
        }
        lines
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let widget = Paragraph::new(Text::from(self.lines()))
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(widget, area);
    }
}
