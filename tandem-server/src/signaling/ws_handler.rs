use crate::app::AppState;
use crate::error::Error;
use crate::gate::{Handshake, IdentityGate};
use crate::hub::HubCommand;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tandem_core::{ClientSignal, ConnectionId, Peer};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Upgrade endpoint, e.g. `GET /ws?username=Alice`.
///
/// Anonymous attempts are answered with `400 Bad Request` and never upgraded.
pub async fn ws_handler(
    Query(handshake): Query<Handshake>,
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, Error> {
    let name = IdentityGate::validate(&handshake).inspect_err(|e| {
        warn!("Refusing connection: {}", e);
    })?;

    let peer = Peer::new(ConnectionId::new(), name);
    let span = info_span!("connection", id = %peer.id, name = %peer.name);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, peer, state).instrument(span)))
}

async fn handle_socket(socket: WebSocket, peer: Peer, state: AppState) {
    let id = peer.id;
    info!("New WebSocket connection");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Registered before the admit so the roster snapshot has somewhere to go.
    state.signaling.add_peer(id, tx);

    if state.hub_tx.send(HubCommand::Admit { peer }).await.is_err() {
        error!("{}", Error::HubClosed);
        state.signaling.remove_peer(&id);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let hub_tx = state.hub_tx.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientSignal>(&text) {
                        Ok(signal) => {
                            let cmd = HubCommand::from_signal(id, signal);
                            if hub_tx.send(cmd).await.is_err() {
                                error!("{}", Error::HubClosed);
                                break;
                            }
                        }
                        Err(e) => warn!("Invalid signal from {}: {}", id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
        .in_current_span()
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    if state.hub_tx.send(HubCommand::Disconnect { id }).await.is_err() {
        debug!("{}", Error::HubClosed);
    }
    state.signaling.remove_peer(&id);
    info!("WebSocket disconnected");
}
