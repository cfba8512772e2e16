//! Option source abstraction for the dialogue engine

use async_trait::async_trait;
use faqbot_client::{FaqClient, OptionItem};

/// Source of the selectable option sets offered at each dialogue step.
///
/// The widget treats this as a black box: it asks for the options belonging
/// to a step and either gets an ordered list or an error it converts into
/// silent degradation.
#[async_trait]
pub trait OptionSource: Send + Sync {
    /// Fetch the ordered option set for a step
    async fn fetch(&self, step: u32) -> faqbot_client::Result<Vec<OptionItem>>;
}

/// Option source backed by the FAQ backend over HTTP
pub struct HttpOptionSource {
    client: FaqClient,
}

impl HttpOptionSource {
    /// Create a source from a configured client
    pub fn new(client: FaqClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OptionSource for HttpOptionSource {
    async fn fetch(&self, step: u32) -> faqbot_client::Result<Vec<OptionItem>> {
        self.client.chat_options(step).await
    }
}
