use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::pool::structs::pools::Pools;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_service::AnnounceService;
use crate::tracker::structs::scrape_service::ScrapeService;
use crate::tracker::traits::peer_store::PeerStore;
use crate::tracker::traits::random_source::RandomSource;
use crate::udp::structs::connection_id_manager::ConnectionIdManager;

/// Everything a transport needs, built once at startup and shared by `Arc`.
#[derive(Debug)]
pub struct TrackerContext {
    pub config: Arc<Configuration>,
    pub pools: Arc<Pools>,
    pub store: Arc<dyn PeerStore>,
    pub stats: Arc<StatsAtomics>,
    pub random: Arc<dyn RandomSource>,
    pub announce: AnnounceService,
    pub scrape: ScrapeService,
    pub connection_ids: ConnectionIdManager,
}
