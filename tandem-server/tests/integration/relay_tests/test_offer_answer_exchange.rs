use serde_json::json;
use tandem_core::ServerSignal;
use tandem_server::HubCommand;

use crate::integration::{create_test_hub, init_tracing};
use crate::utils::{admit, finish};

#[tokio::test]
async fn test_offer_answer_exchange() {
    init_tracing();

    let (cmd_tx, _delivered_rx, signaling, hub) = create_test_hub();

    let alice = admit(&cmd_tx, "Alice").await.expect("Admit Alice");
    let bob = admit(&cmd_tx, "Bob").await.expect("Admit Bob");
    let carol = admit(&cmd_tx, "Carol").await.expect("Admit Carol");

    let offer = json!({ "type": "offer", "sdp": "v=0\r\no=alice" });
    let answer = json!({ "type": "answer", "sdp": "v=0\r\no=bob" });

    cmd_tx
        .send(HubCommand::Offer {
            from: alice,
            to: bob,
            offer: offer.clone(),
        })
        .await
        .expect("Send Offer");
    cmd_tx
        .send(HubCommand::Answer {
            from: bob,
            to: alice,
            answer: answer.clone(),
        })
        .await
        .expect("Send Answer");

    finish(cmd_tx, hub).await.expect("Hub did not finish");

    let bob_signals = signaling.signals_for(&bob).await;
    assert_eq!(
        bob_signals.last(),
        Some(&ServerSignal::OfferMade { offer, from: alice })
    );

    let alice_signals = signaling.signals_for(&alice).await;
    assert_eq!(
        alice_signals.last(),
        Some(&ServerSignal::AnswerMade { answer, from: bob })
    );
    assert!(
        !alice_signals
            .iter()
            .any(|s| matches!(s, ServerSignal::OfferMade { .. }))
    );

    // Carol only ever sees roster traffic.
    assert!(
        signaling
            .signals_for(&carol)
            .await
            .iter()
            .all(|s| !matches!(
                s,
                ServerSignal::OfferMade { .. } | ServerSignal::AnswerMade { .. }
            ))
    );
}
