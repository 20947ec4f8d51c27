use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_snapshot::PeerSnapshot;

/// Counters are not stored; they are rebuilt from `peers` on load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SwarmSnapshot {
    pub info_hash: InfoHash,
    pub peers: Vec<PeerSnapshot>,
    pub baseline_providers: Vec<PeerSnapshot>,
}
