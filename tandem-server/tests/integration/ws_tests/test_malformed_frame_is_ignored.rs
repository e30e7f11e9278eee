use tandem_core::{ClientSignal, ServerSignal};

use crate::integration::{init_tracing, spawn_test_server};
use crate::utils::TestClient;

#[tokio::test]
async fn test_malformed_frame_is_ignored() {
    init_tracing();
    let addr = spawn_test_server().await;

    let (mut alice, _) = TestClient::join(addr, "Alice")
        .await
        .expect("Alice failed to join");

    alice.send_raw("not json at all").await.expect("send garbage");
    alice
        .send_raw(r#"{"event":"offer","data":{"offer":"sdp1"}}"#)
        .await
        .expect("send offer without target");
    assert!(alice.stays_silent().await);

    // The connection is still usable afterwards.
    alice
        .send(&ClientSignal::SendText {
            message: "still here".into(),
            to: None,
        })
        .await
        .expect("send text");

    match alice.recv().await.expect("text-delivered") {
        ServerSignal::TextDelivered { message } => {
            assert_eq!(message.content, "still here");
            assert_eq!(message.sequence_id, 0);
        }
        other => panic!("Unexpected signal {other:?}"),
    }

    alice.close().await.expect("close");
}
