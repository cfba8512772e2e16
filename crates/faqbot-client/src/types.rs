//! Wire types for the FAQ chat backend

use serde::{Deserialize, Serialize};

/// A selectable question/answer pair offered at a dialogue step.
///
/// The backend serves these as a JSON array per step; order is meaningful and
/// preserved as received. `id` is opaque and only used as an equality and
/// display key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Unique identifier within a single fetch
    pub id: u64,
    /// Display text shown as a selectable prompt
    pub question: String,
    /// Text revealed into the transcript when the option is chosen
    pub answer: String,
}
