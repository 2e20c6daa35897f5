// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::message::ErrorBody;
use crate::services::responder::ResponderError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("response generation failed: {0}")]
    Upstream(#[from] ResponderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(reason) => {
                tracing::debug!(%reason, "rejected predict request");
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: reason })).into_response()
            }
            AppError::Upstream(err) => {
                // Callers only ever see a generic 500.
                tracing::error!(error = %err, "responder failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
