//! Studyline timeline API - entry point

use std::sync::Arc;

use studyline_api::{routes, AppContext};
use studyline_domain::{Result, StudylineError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first so config loading is visible.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env file found"),
    }

    let config = studyline_infra::config::load()?;
    let bind_addr = config.server.bind_addr.clone();
    let ctx = Arc::new(AppContext::new(config)?);

    let app = routes::router(ctx);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| StudylineError::Config(format!("failed to bind {bind_addr}: {e}")))?;

    info!(%bind_addr, "studyline timeline API listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| StudylineError::Internal(format!("server error: {e}")))
}
