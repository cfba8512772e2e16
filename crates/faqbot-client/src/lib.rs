//! faqbot-client: HTTP client for the FAQ chat backend
//!
//! This crate wraps the backend's `faq-chat` endpoint, which serves the
//! question/answer option sets offered at each step of the scripted dialogue.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientConfig, FaqClient};
pub use error::{Error, Result};
pub use types::OptionItem;
