use std::sync::Arc;
use std::time::Duration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::traits::peer_store::PeerStore;

/// Runs [`PeerStore::trim`] every `interval`, expiring peers idle for longer than `timeout`.
#[derive(Debug)]
pub struct ExpiryManager {
    pub(crate) store: Arc<dyn PeerStore>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) interval: Duration,
    pub(crate) timeout: i64,
}
