use crate::hub::{HubCommand, HubState};
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

/// The single task that owns the roster and chat log.
///
/// Commands from every socket funnel through one channel and are applied
/// strictly one after another; the resulting messages are then handed to
/// the signaling output.
pub struct Hub {
    state: HubState,
    command_rx: mpsc::Receiver<HubCommand>,
    signaling: Arc<dyn SignalingOutput>,
}

impl Hub {
    pub fn new(
        command_rx: mpsc::Receiver<HubCommand>,
        signaling: Arc<dyn SignalingOutput>,
    ) -> Self {
        Self {
            state: HubState::new(),
            command_rx,
            signaling,
        }
    }

    /// Starts a hub on the current runtime and returns the sender used to
    /// feed it. The hub stops once every sender has been dropped.
    pub fn spawn(
        signaling: Arc<dyn SignalingOutput>,
        capacity: usize,
    ) -> (mpsc::Sender<HubCommand>, JoinHandle<HubState>) {
        let (tx, rx) = mpsc::channel(capacity);
        let hub = Hub::new(rx, signaling);
        (tx, tokio::spawn(hub.run()))
    }

    /// Runs until the command channel closes and returns the final state.
    pub async fn run(mut self) -> HubState {
        info!("Hub event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            for out in self.state.dispatch(cmd) {
                self.signaling.deliver(out.to, out.signal).await;
            }
        }

        info!("Command channel closed. Hub event loop finished");
        self.state
    }
}
