use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::ahash_map::AHashMap;

/// Every peer announcing one info hash.
///
/// `complete + incomplete == peers.len()` whenever the swarm lock is released.
/// Baseline providers are tracked separately and never counted.
#[derive(Debug, Default)]
pub struct Swarm {
    pub peers: AHashMap<PeerId, Box<Peer>>,
    pub baseline_providers: AHashMap<PeerId, Box<Peer>>,
    pub complete: u32,
    pub incomplete: u32,
    /// Set by the expiry sweep right before the swarm leaves the store map.
    pub(crate) retired: bool,
}
