use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the always-visible diagnostic log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            message,
        }
    }

    /// Display form used by the diagnostic panel.
    pub fn render(&self) -> String {
        format!("[Error] {}", self.message)
    }
}

pub trait Loggable {
    fn add_log(&mut self, message: String);
    fn get_logs(&self) -> &[LogEntry];
}
