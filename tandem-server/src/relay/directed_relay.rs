use crate::error::{Error, Result};
use crate::hub::Outbound;
use crate::registry::ConnectionRegistry;
use serde_json::Value;
use tandem_core::{ConnectionId, ServerSignal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Offer,
    Answer,
}

/// A session description on its way to one specific peer. The sender is
/// not part of the envelope; the relay stamps it on when forwarding.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub kind: EnvelopeKind,
    pub payload: Value,
    pub to: ConnectionId,
}

/// Point-to-point forwarding over the live roster.
pub struct DirectedRelay<'a> {
    registry: &'a ConnectionRegistry,
}

impl<'a> DirectedRelay<'a> {
    pub fn new(registry: &'a ConnectionRegistry) -> Self {
        Self { registry }
    }

    /// Addresses the envelope to its target, tagged with `from`. The payload
    /// is carried as-is.
    pub fn forward(&self, from: ConnectionId, envelope: Envelope) -> Result<Outbound> {
        let signal = match envelope.kind {
            EnvelopeKind::Offer => ServerSignal::OfferMade {
                offer: envelope.payload,
                from,
            },
            EnvelopeKind::Answer => ServerSignal::AnswerMade {
                answer: envelope.payload,
                from,
            },
        };
        self.route(envelope.to, signal)
    }

    /// Addresses an arbitrary signal to a single live connection.
    pub fn route(&self, to: ConnectionId, signal: ServerSignal) -> Result<Outbound> {
        if !self.registry.contains(&to) {
            return Err(Error::UnknownTarget(to));
        }
        Ok(Outbound { to, signal })
    }
}
