//! Notification feed shown from the top bar.

/// A notification with its creation time, rendered with a relative age.
#[derive(Clone)]
pub struct NotificationEntry {
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl NotificationEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: chrono::Local::now(),
        }
    }

    /// Human-readable age: "agora", "5m atrás", "2h atrás", or a date for
    /// anything older than a day.
    pub fn time_ago(&self) -> String {
        let duration = chrono::Local::now().signed_duration_since(self.timestamp);
        if duration.num_seconds() < 60 {
            "agora".to_string()
        } else if duration.num_minutes() < 60 {
            format!("{}m atrás", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h atrás", duration.num_hours())
        } else {
            self.timestamp.format("%d/%m %H:%M").to_string()
        }
    }
}
