use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::responder::ResponderError,
    state::SharedState,
};

pub async fn predict_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // A missing `message` is rejected here rather than handed to the responder.
    let Json(ChatRequest { message }) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let responder = state.responder.clone();
    let answer = tokio::task::spawn_blocking(move || responder.get_response(&message))
        .await
        .map_err(|e| ResponderError::Worker(e.to_string()))??;

    Ok(Json(ChatResponse { answer }))
}
