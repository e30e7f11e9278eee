use std::collections::HashSet;
use tandem_core::{ConnectionId, Peer};

/// The roster of everyone currently online, kept in admission order.
///
/// A disconnect for an id that is not online leaves a tombstone behind, so
/// the admit it overtook is refused when it finally arrives. The tombstone
/// is consumed by that admit, which keeps the set bounded by in-flight races.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    peers: Vec<Peer>,
    departed: HashSet<ConnectionId>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the peer to the end of the roster. Returns `false` if the id is
    /// already present or its disconnect was seen first.
    pub fn admit(&mut self, peer: Peer) -> bool {
        if self.departed.remove(&peer.id) || self.contains(&peer.id) {
            return false;
        }

        self.peers.push(peer);
        true
    }

    /// Removes the peer and reports whether it was online.
    pub fn remove(&mut self, id: &ConnectionId) -> bool {
        let Some(pos) = self.peers.iter().position(|p| &p.id == id) else {
            self.departed.insert(*id);
            return false;
        };
        self.peers.remove(pos);
        true
    }

    pub fn snapshot(&self) -> Vec<Peer> {
        self.peers.clone()
    }

    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Peer> {
        self.peers.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ConnectionId) -> bool {
        self.get(id).is_some()
    }

    /// Number of disconnects still waiting for the admit they overtook.
    pub fn pending_tombstones(&self) -> usize {
        self.departed.len()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
