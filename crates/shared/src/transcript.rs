//! Chat transcript lines shown in the window.

use chrono::Local;
use std::fmt;

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Agent,
    /// The delegate failed
    Error,
    /// Notices from file actions (open, attach)
    System,
}

/// One timestamped transcript line. Append-only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Local wall-clock `HH:MM:SS`
    pub timestamp: String,
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    /// Stamp a new entry with the current local time.
    pub fn now(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            speaker,
            text: text.into(),
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let entry = TranscriptEntry::now(Speaker::User, "You: hi");
        let parts: Vec<&str> = entry.timestamp.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_display_prefixes_timestamp() {
        let entry = TranscriptEntry {
            timestamp: "09:05:01".into(),
            speaker: Speaker::Agent,
            text: "Agent: ok".into(),
        };
        assert_eq!(entry.to_string(), "[09:05:01] Agent: ok");
    }
}
