//! faqbot-dialogue: Scripted FAQ dialogue engine
//!
//! This crate drives the conversational FAQ widget: a bounded step counter,
//! an append-only transcript of question/answer exchanges, and a replaceable
//! set of selectable options fetched per step from an [`OptionSource`].

pub mod events;
pub mod source;
pub mod transcript;
pub mod widget;

pub use events::WidgetEvent;
pub use source::{HttpOptionSource, OptionSource};
pub use transcript::{Speaker, TranscriptEntry};
pub use widget::{FaqWidget, WidgetConfig, WidgetSnapshot};

pub use faqbot_client::OptionItem;
