//! Shared message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A push notification payload — constructed fresh per send, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Title shown in the notification tray.
    pub title: String,
    /// Body content.
    pub body: String,
    /// Opaque key/value payload forwarded to the client app
    /// (deep-link URLs, notification kind tags).
    #[serde(default)]
    pub data: HashMap<String, String>,
    /// When the message was built.
    pub timestamp: DateTime<Utc>,
}

impl NotificationMessage {
    /// Create a message with an empty data payload.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach a data key/value pair.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data() {
        let msg = NotificationMessage::new("Jai Shri Ram", "Good morning")
            .with_data("type", "daily_blessing")
            .with_data("url", "/daily-guide");
        assert_eq!(msg.data.len(), 2);
        assert_eq!(msg.data["type"], "daily_blessing");
    }
}
