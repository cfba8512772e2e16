//! FAQ backend client

use std::time::Duration;

use crate::{
    error::{Error, Result},
    types::OptionItem,
};

/// Configuration for [`FaqClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `http://localhost:5000/api`
    pub base_url: String,
    /// Optional request timeout. `None` leaves requests unbounded; a hung
    /// fetch then simply means no options are shown.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout: None,
        }
    }
}

/// Client for the FAQ chat backend
#[derive(Debug)]
pub struct FaqClient {
    client: reqwest::Client,
    base_url: String,
}

impl FaqClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::InvalidConfig("base URL must not be empty".into()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch the option set for a dialogue step.
    ///
    /// Success is HTTP 200 with a JSON array (possibly empty); order is
    /// preserved as served. Non-success statuses and malformed bodies come
    /// back as typed errors; the caller decides the degradation policy.
    pub async fn chat_options(&self, step: u32) -> Result<Vec<OptionItem>> {
        let url = format!("{}/faq-chat", self.base_url);

        tracing::debug!(step, %url, "fetching FAQ options");
        let response = self
            .client
            .get(&url)
            .query(&[("step", step)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), body));
        }

        let body = response.text().await?;
        parse_options(&body)
    }
}

/// Decode a response body into an option list without letting a malformed
/// payload panic past this boundary.
fn parse_options(body: &str) -> Result<Vec<OptionItem>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(Error::UnexpectedResponse(format!(
            "expected a JSON array, got: {}",
            truncate(body, 120)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
