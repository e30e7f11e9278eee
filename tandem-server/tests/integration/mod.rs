pub mod connection_tests;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Level;

use tandem_server::{Hub, HubCommand, HubState, ServerConfig, build_app};

use crate::utils::{Delivered, MockSignalingOutput};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_hub() -> (
    mpsc::Sender<HubCommand>,
    mpsc::UnboundedReceiver<Delivered>,
    MockSignalingOutput,
    JoinHandle<HubState>,
) {
    let (signaling, delivered_rx) = MockSignalingOutput::new();
    let (cmd_tx, hub) = Hub::spawn(Arc::new(signaling.clone()), 100);

    (cmd_tx, delivered_rx, signaling, hub)
}

/// Serve a fresh app on an ephemeral local port.
pub async fn spawn_test_server() -> SocketAddr {
    let app = build_app(&ServerConfig::default()).expect("Failed to build app");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}
