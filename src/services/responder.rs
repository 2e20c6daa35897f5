// src/services/responder.rs
//! The seam between the HTTP layer and whatever produces chatbot answers.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponderError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream reply was not usable: {0}")]
    InvalidReply(String),

    #[error("responder worker failed: {0}")]
    Worker(String),
}

/// Turns one user message into one answer.
///
/// Implementations are called from the blocking thread pool, once per
/// `/predict` request, possibly from several threads at once. Any state they
/// hold (a loaded model, an HTTP client) must be safe for concurrent reads.
pub trait Responder: Send + Sync {
    fn get_response(&self, text: &str) -> Result<String, ResponderError>;
}

impl<F> Responder for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn get_response(&self, text: &str) -> Result<String, ResponderError> {
        Ok(self(text))
    }
}
