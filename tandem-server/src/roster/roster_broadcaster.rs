use crate::hub::Outbound;
use tandem_core::{ConnectionId, Peer, ServerSignal};

/// Turns roster changes into the notifications every client needs to keep
/// its peer list in sync.
pub struct RosterBroadcaster;

impl RosterBroadcaster {
    /// `previous` is the roster as it was before `joined` was admitted.
    pub fn on_admit(previous: &[Peer], joined: &Peer) -> Vec<Outbound> {
        let mut out = Vec::with_capacity(previous.len() + 2);

        out.push(Outbound {
            to: joined.id,
            signal: ServerSignal::RosterSnapshot {
                users: previous.to_vec(),
            },
        });
        out.push(Outbound {
            to: joined.id,
            signal: ServerSignal::SelfIdentity {
                id: joined.id,
                name: joined.name.clone(),
            },
        });

        let announcement = ServerSignal::RosterAdd {
            users: vec![joined.clone()],
        };
        out.extend(previous.iter().map(|peer| Outbound {
            to: peer.id,
            signal: announcement.clone(),
        }));

        out
    }

    /// `remaining` is the roster after `left` was removed.
    pub fn on_remove(remaining: &[Peer], left: ConnectionId) -> Vec<Outbound> {
        remaining
            .iter()
            .map(|peer| Outbound {
                to: peer.id,
                signal: ServerSignal::RosterRemove { id: left },
            })
            .collect()
    }
}
