use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use chatbot_web::config::{Config, ConfigError, USAGE};
use chatbot_web::routes;
use chatbot_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chatbot_web=info,tower_http=info")),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("{USAGE}\nchatbot-web: error: {e}");
            return Ok(ExitCode::from(2));
        }
    };

    let state = Arc::new(AppState::from_config(&config));

    // The chat widget may be loaded from another origin than the API.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_files)
        .with_state(state)
        .layer(cors);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        root = %config.static_files.root.display(),
        "chatbot web server running at http://{addr}"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
