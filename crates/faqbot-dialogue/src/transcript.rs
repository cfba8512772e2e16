//! Transcript types: the ordered log of user/agent exchanges.

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Agent,
}

/// A single message in the widget transcript.
///
/// Entries are created in pairs (the user's question, then the agent's
/// answer) when an option is selected, and are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl TranscriptEntry {
    /// Create a user entry with the current time
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Create an agent entry with the current time
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
