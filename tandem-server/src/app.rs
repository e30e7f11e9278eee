use crate::config::{ConfigError, ServerConfig};
use crate::hub::{Hub, HubCommand};
use crate::signaling::{SignalingService, ws_handler};
use anyhow::Context;
use axum::Router;
use axum::routing::get;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub hub_tx: mpsc::Sender<HubCommand>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state)
}

/// Spawns a fresh hub and wraps it in the HTTP app. Must be called from
/// inside a Tokio runtime.
pub fn build_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    config.validate()?;
    let cors = config.cors_layer()?;

    let signaling = SignalingService::new();
    let (hub_tx, _) = Hub::spawn(Arc::new(signaling.clone()), config.hub_capacity);

    Ok(router(AppState { signaling, hub_tx })
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn serve<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&config)?;

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        "Signaling server listening on ws://{}/ws",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Signaling server stopped unexpectedly")?;

    info!("Signaling server shut down");
    Ok(())
}
