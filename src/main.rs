use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use agricheck::web::{self, AppState};
use agricheck::{Config, GeminiModel, GenerativeModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("agricheck=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{e}");
        e
    })?;

    let model = GeminiModel::create(&config.credential, &config.model)
        .map_err(|e| {
            tracing::error!("{e}");
            e
        })?
        .with_base_url(&config.api_base);
    tracing::info!(model = model.model_id(), "Gemini client configured");

    let state = AppState::new(Arc::new(model), config.jpeg_quality);
    let app = web::router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("Agricheck running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
