//! User-facing notices.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationLevel {
    pub fn label(self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "OK",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    /// One-line form for the footer, e.g. `[14:03:27] WARN: ...`.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.created_at.format("%H:%M:%S"),
            self.level.label(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn summary_carries_time_level_and_message() {
        let mut note = Notification::warning("Spelling correction unavailable");
        note.created_at = Utc.with_ymd_and_hms(2024, 5, 17, 14, 3, 27).unwrap();
        assert_eq!(
            note.summary(),
            "[14:03:27] WARN: Spelling correction unavailable"
        );
    }

    #[test]
    fn constructors_set_level() {
        assert_eq!(Notification::info("a").level, NotificationLevel::Info);
        assert_eq!(Notification::error("b").level, NotificationLevel::Error);
        assert_eq!(Notification::success("c").level.label(), "OK");
    }
}
