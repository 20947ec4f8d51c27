use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm::Swarm;

impl Swarm {
    /// Removes a peer and keeps the seed/leech counters in step.
    pub fn remove_peer(&mut self, peer_id: &PeerId) -> Option<Box<Peer>> {
        let peer = self.peers.remove(peer_id)?;
        if peer.complete {
            self.complete -= 1;
        } else {
            self.incomplete -= 1;
        }
        Some(peer)
    }

    /// Records a seed/leech transition of an existing peer.
    #[inline]
    pub(crate) fn transition(&mut self, was_complete: bool, complete: bool) {
        match (was_complete, complete) {
            (false, true) => {
                self.incomplete -= 1;
                self.complete += 1;
            }
            (true, false) => {
                self.complete -= 1;
                self.incomplete += 1;
            }
            _ => {}
        }
    }

    #[inline]
    pub(crate) fn count_new(&mut self, complete: bool) {
        if complete {
            self.complete += 1;
        } else {
            self.incomplete += 1;
        }
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}
