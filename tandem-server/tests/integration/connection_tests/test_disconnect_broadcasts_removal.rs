use tandem_core::ServerSignal;
use tandem_server::HubCommand;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{admit, finish};

#[tokio::test]
async fn test_disconnect_broadcasts_removal() {
    init_tracing();

    let (cmd_tx, _delivered_rx, signaling, hub) = create_test_hub();

    let alice = admit(&cmd_tx, "Alice").await.expect("Admit Alice");
    let bob = admit(&cmd_tx, "Bob").await.expect("Admit Bob");
    let carol = admit(&cmd_tx, "Carol").await.expect("Admit Carol");

    cmd_tx
        .send(HubCommand::Disconnect { id: alice })
        .await
        .expect("Send Disconnect");

    let state = finish(cmd_tx, hub).await.expect("Hub did not finish");

    for id in [bob, carol] {
        let last = signaling.signals_for(&id).await.pop();
        assert_eq!(last, Some(ServerSignal::RosterRemove { id: alice }));
    }

    // Alice never hears about her own departure.
    assert!(
        !signaling
            .signals_for(&alice)
            .await
            .iter()
            .any(|s| matches!(s, ServerSignal::RosterRemove { .. }))
    );

    assert!(!state.registry().contains(&alice));
    assert_eq!(state.registry().len(), 2);
}
