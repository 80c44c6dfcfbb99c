//! Gauge for the lexical/vector blend weight.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct WeightGauge {
    pub title: String,
    /// Weight in 0.0..=1.0; out-of-range values are clamped.
    pub value: f64,
    pub style: Style,
    pub border_style: Style,
}

impl WeightGauge {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let ratio = if self.value.is_finite() {
            self.value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .gauge_style(self.style)
            .label(format!("{:.1}", ratio))
            .ratio(ratio);
        f.render_widget(gauge, area);
    }
}
