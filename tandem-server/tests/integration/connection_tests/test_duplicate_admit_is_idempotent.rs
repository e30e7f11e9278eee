use tandem_core::{ConnectionId, Peer};
use tandem_server::HubCommand;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::finish;

#[tokio::test]
async fn test_duplicate_admit_is_idempotent() {
    init_tracing();

    let (cmd_tx, _delivered_rx, signaling, hub) = create_test_hub();

    let id = ConnectionId::new();
    for _ in 0..2 {
        cmd_tx
            .send(HubCommand::Admit {
                peer: Peer::new(id, "Alice"),
            })
            .await
            .expect("Send Admit");
    }

    let state = finish(cmd_tx, hub).await.expect("Hub did not finish");

    assert_eq!(state.registry().len(), 1);
    // Snapshot and identity once, nothing for the repeat.
    assert_eq!(signaling.signals_for(&id).await.len(), 2);
}

#[tokio::test]
async fn test_late_admit_after_disconnect_is_ignored() {
    init_tracing();

    let (cmd_tx, _delivered_rx, signaling, hub) = create_test_hub();

    let id = ConnectionId::new();
    cmd_tx
        .send(HubCommand::Disconnect { id })
        .await
        .expect("Send Disconnect");
    cmd_tx
        .send(HubCommand::Admit {
            peer: Peer::new(id, "Ghost"),
        })
        .await
        .expect("Send Admit");

    let state = finish(cmd_tx, hub).await.expect("Hub did not finish");

    assert!(state.registry().is_empty());
    assert!(signaling.all().await.is_empty());
}
