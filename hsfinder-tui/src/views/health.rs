//! API status sidebar.

use crate::controller::HealthStatus;
use crate::state::App;
use crate::theme::health_color;
use crate::widgets::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SEARCH_TIPS: &str = "\
BM25 only: uncheck \"Use Vector Search\"
Hybrid: check it and adjust alpha
Alpha 0.0: pure BM25
Alpha 1.0: pure vector similarity
Alpha 0.5: balanced hybrid";

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(area);

    let status = match &app.health {
        HealthStatus::Unchecked => "Press H to check API health".to_string(),
        HealthStatus::Reachable { .. } => "API is reachable".to_string(),
        HealthStatus::Unhealthy { message } => message.clone(),
    };
    StatusIndicator {
        title: "API Status".to_string(),
        status,
        style: Style::default().fg(health_color(&app.health, &app.theme)),
    }
    .render(f, chunks[0]);

    let payload = Paragraph::new(health_body(app))
        .block(Block::default().title("Health").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(payload, chunks[1]);

    let tips = Paragraph::new(SEARCH_TIPS)
        .style(Style::default().fg(app.theme.text_dim))
        .block(Block::default().title("Search Tips").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(tips, chunks[2]);
}

/// Health payload once checked, otherwise the configured endpoint.
fn health_body(app: &App) -> String {
    match &app.health {
        HealthStatus::Reachable { payload } => payload.clone(),
        _ => format!("Base URL:\n{}", app.config.base_url()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiClient;
    use crate::config::HsfinderConfig;

    fn app(url: &str) -> App {
        let config = HsfinderConfig::default().with_base_url_override(Some(url.to_string()));
        let api = ApiClient::new(&config).unwrap();
        App::new(config, api)
    }

    #[test]
    fn unchecked_health_shows_configured_base_url() {
        let app = app("http://localhost:8000/");
        assert_eq!(health_body(&app), "Base URL:\nhttp://localhost:8000");
    }

    #[test]
    fn reachable_health_shows_payload() {
        let mut app = app("http://localhost:8000");
        app.health = HealthStatus::Reachable {
            payload: "{\"status\": \"ok\"}".to_string(),
        };
        assert_eq!(health_body(&app), "{\"status\": \"ok\"}");
    }
}
