// src/routes/mod.rs
pub mod chat;

use crate::config::StaticFiles;
use crate::state::SharedState;
use axum::{
    Router,
    routing::{get_service, post},
};
use chat::predict_handler;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `POST /predict`, `/assets/*` and everything else from the static root.
///
/// `ServeDir` rejects `..` segments, so nothing outside the configured
/// directories can be reached. Directories are never listed or redirected:
/// only `/` maps to an index file.
pub fn create_router(static_files: &StaticFiles) -> Router<SharedState> {
    let root = files_in(&static_files.root);

    // GET /predict falls through to the static root like any other path.
    let mut router = Router::new()
        .route("/", get_service(ServeFile::new(static_files.root.join("index.html"))))
        .route("/predict", post(predict_handler).get_service(root.clone()));

    if let Some(assets) = &static_files.assets {
        router = router.nest_service("/assets", files_in(assets));
    }

    router
        .fallback_service(root)
        .layer(TraceLayer::new_for_http())
}

fn files_in(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(false)
}
