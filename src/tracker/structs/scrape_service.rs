use std::sync::Arc;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::traits::peer_store::PeerStore;

#[derive(Debug, Clone)]
pub struct ScrapeService {
    pub(crate) store: Arc<dyn PeerStore>,
    pub(crate) stats: Arc<StatsAtomics>,
}
