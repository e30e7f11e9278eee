use crate::chat::ChatLog;
use crate::hub::{HubCommand, Outbound};
use crate::registry::ConnectionRegistry;
use crate::relay::{DirectedRelay, Envelope, EnvelopeKind};
use crate::roster::RosterBroadcaster;
use tandem_core::{ChatDelivery, ConnectionId, Peer, ServerSignal};
use tracing::{debug, info};

/// Everything the hub owns: the roster and the chat history.
///
/// `dispatch` is synchronous and does no I/O, so each command is applied
/// completely before the next one is looked at.
#[derive(Debug, Default)]
pub struct HubState {
    registry: ConnectionRegistry,
    chat_log: ChatLog,
}

impl HubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    pub fn dispatch(&mut self, cmd: HubCommand) -> Vec<Outbound> {
        match cmd {
            HubCommand::Admit { peer } => self.admit(peer),
            HubCommand::Disconnect { id } => self.disconnect(id),
            HubCommand::Offer { from, to, offer } => self.relay(
                from,
                Envelope {
                    kind: EnvelopeKind::Offer,
                    payload: offer,
                    to,
                },
            ),
            HubCommand::Answer { from, to, answer } => self.relay(
                from,
                Envelope {
                    kind: EnvelopeKind::Answer,
                    payload: answer,
                    to,
                },
            ),
            HubCommand::Chat { from, message, to } => self.chat(from, message, to),
        }
    }

    fn admit(&mut self, peer: Peer) -> Vec<Outbound> {
        let previous = self.registry.snapshot();

        if !self.registry.admit(peer.clone()) {
            debug!("Ignoring repeated admit for {}", peer.id);
            return Vec::new();
        }

        info!(
            "Peer {} joined as {:?} ({} online)",
            peer.id,
            peer.name,
            self.registry.len()
        );
        RosterBroadcaster::on_admit(&previous, &peer)
    }

    fn disconnect(&mut self, id: ConnectionId) -> Vec<Outbound> {
        if !self.registry.remove(&id) {
            debug!("Disconnect for {} which was not online", id);
            return Vec::new();
        }

        info!("Peer {} left ({} online)", id, self.registry.len());
        RosterBroadcaster::on_remove(self.registry.peers(), id)
    }

    fn relay(&mut self, from: ConnectionId, envelope: Envelope) -> Vec<Outbound> {
        if !self.registry.contains(&from) {
            debug!(
                "Dropping {:?} from {} which is not online",
                envelope.kind, from
            );
            return Vec::new();
        }
        if envelope.to == from {
            debug!("Dropping {:?} that {} addressed to itself", envelope.kind, from);
            return Vec::new();
        }

        let kind = envelope.kind;
        match DirectedRelay::new(&self.registry).forward(from, envelope) {
            Ok(out) => {
                debug!("Relaying {:?} {} -> {}", kind, from, out.to);
                vec![out]
            }
            Err(e) => {
                debug!("Dropping {:?} from {}: {}", kind, from, e);
                Vec::new()
            }
        }
    }

    fn chat(
        &mut self,
        from: ConnectionId,
        message: String,
        to: Option<ConnectionId>,
    ) -> Vec<Outbound> {
        if !self.registry.contains(&from) {
            debug!("Dropping chat from {} which is not online", from);
            return Vec::new();
        }

        let sequence_id = self.chat_log.append(message, from);
        let Some(entry) = self.chat_log.get(sequence_id) else {
            return Vec::new();
        };
        let signal = ServerSignal::TextDelivered {
            message: ChatDelivery::from(entry),
        };

        let mut out = Vec::with_capacity(2);
        if let Some(target) = to.filter(|t| *t != from) {
            match DirectedRelay::new(&self.registry).route(target, signal.clone()) {
                Ok(o) => out.push(o),
                Err(e) => debug!("Chat #{} not relayed: {}", sequence_id, e),
            }
        }
        out.push(Outbound { to: from, signal });
        out
    }
}
