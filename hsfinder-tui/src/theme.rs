//! Colour palette and status colour helpers.

use crate::controller::HealthStatus;
use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }
}

pub fn notification_color(level: NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}

pub fn health_color(status: &HealthStatus, theme: &Theme) -> Color {
    match status {
        HealthStatus::Unchecked => theme.text_dim,
        HealthStatus::Reachable { .. } => theme.success,
        HealthStatus::Unhealthy { .. } => theme.error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_use_distinct_colors() {
        let theme = Theme::default();
        assert_eq!(notification_color(NotificationLevel::Error, &theme), theme.error);
        assert_eq!(notification_color(NotificationLevel::Warning, &theme), theme.warning);
        assert_ne!(
            notification_color(NotificationLevel::Success, &theme),
            notification_color(NotificationLevel::Error, &theme)
        );
    }

    #[test]
    fn unchecked_health_is_dim() {
        let theme = Theme::default();
        assert_eq!(health_color(&HealthStatus::Unchecked, &theme), theme.text_dim);
    }
}
