// src/services/upstream.rs
use std::time::Duration;

use tokio::runtime::Handle;

use super::responder::{Responder, ResponderError};
use crate::message::{ChatRequest, ChatResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Forwards each message to a remote service speaking the same
/// `{"message"}` -> `{"answer"}` contract as `/predict`.
#[derive(Debug, Clone)]
pub struct UpstreamResponder {
    client: reqwest::Client,
    url: String,
}

impl UpstreamResponder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    async fn forward(&self, text: &str) -> Result<String, ResponderError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(REQUEST_TIMEOUT)
            .json(&ChatRequest {
                message: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ResponderError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResponderError::Upstream(format!(
                "{} answered with status {status}",
                self.url
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ResponderError::InvalidReply(e.to_string()))?;
        Ok(body.answer)
    }
}

impl Responder for UpstreamResponder {
    fn get_response(&self, text: &str) -> Result<String, ResponderError> {
        // Only ever called from the blocking pool, which can park on the runtime.
        let handle = Handle::try_current()
            .map_err(|e| ResponderError::Worker(format!("no tokio runtime: {e}")))?;
        tracing::debug!(url = %self.url, "forwarding message upstream");
        handle.block_on(self.forward(text))
    }
}
