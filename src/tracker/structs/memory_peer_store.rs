use std::sync::Arc;
use parking_lot::RwLock;
use crate::pool::structs::pools::Pools;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::traits::random_source::RandomSource;
use crate::tracker::types::ahash_map::AHashMap;
use crate::tracker::types::swarm_handle::SwarmHandle;

/// In-memory peer store with two lock levels.
///
/// `swarms` guards only the map structure. Every swarm carries its own
/// lock for its peers and counters. A handle is cloned out of the map and
/// the map lock dropped before the swarm lock is taken.
#[derive(Debug)]
pub struct MemoryPeerStore {
    pub(crate) swarms: RwLock<AHashMap<InfoHash, SwarmHandle>>,
    pub(crate) pools: Arc<Pools>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) random: Arc<dyn RandomSource>,
    pub(crate) min_leechers: u32,
    pub(crate) fast_mode: bool,
}
