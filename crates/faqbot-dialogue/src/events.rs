//! Widget event types

use faqbot_client::OptionItem;
use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptEntry;

/// Events emitted by the widget as the dialogue progresses.
///
/// These are notifications for observers (rendering, scroll-to-bottom on
/// append, diagnostics); consuming them has no effect on widget state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// Widget transitioned from closed to open
    Opened { step: u32 },

    /// Widget was dismissed; state persists for the next open
    Closed,

    /// An entry was appended to the transcript. Emitted once per entry, so a
    /// selection produces two of these (user question, then agent answer).
    MessageAppended { entry: TranscriptEntry },

    /// A fetch resolved and replaced the pending option set
    OptionsLoaded { step: u32, options: Vec<OptionItem> },

    /// A fetch failed; the widget degrades to an empty option set
    FetchFailed { step: u32, message: String },
}
