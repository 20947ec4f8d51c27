use std::net::SocketAddr;
use std::sync::Arc;
use crate::pool::structs::pools::Pools;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::traits::peer_store::PeerStore;
use crate::tracker::traits::random_source::RandomSource;
use crate::tracker::types::ahash_map::AHashSet;

#[derive(Debug, Clone)]
pub struct AnnounceService {
    pub(crate) store: Arc<dyn PeerStore>,
    pub(crate) pools: Arc<Pools>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) random: Arc<dyn RandomSource>,
    pub(crate) announce_interval: i64,
    pub(crate) announce_fuzz: u64,
    pub(crate) numwant_default: usize,
    pub(crate) numwant_limit: usize,
    pub(crate) baseline_providers: Arc<AHashSet<SocketAddr>>,
}
