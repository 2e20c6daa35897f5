// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::keyword::KeywordResponder;
use crate::services::responder::Responder;
use crate::services::upstream::UpstreamResponder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: Arc<dyn Responder>,
}

impl AppState {
    pub fn new(responder: impl Responder + 'static) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }

    /// Forward to the configured upstream, or answer locally when there is none.
    pub fn from_config(config: &Config) -> Self {
        match &config.upstream_url {
            Some(url) => {
                tracing::info!(%url, "forwarding /predict to upstream responder");
                Self::new(UpstreamResponder::new(url.clone()))
            }
            None => {
                tracing::info!("using built-in keyword responder");
                Self::new(KeywordResponder::new())
            }
        }
    }
}
