use std::sync::Arc;
use std::time::Duration;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::pool::structs::pools::Pools;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::announce_service::AnnounceService;
use crate::tracker::structs::expiry_manager::ExpiryManager;
use crate::tracker::structs::memory_peer_store::MemoryPeerStore;
use crate::tracker::structs::scrape_service::ScrapeService;
use crate::tracker::structs::thread_random::ThreadRandom;
use crate::tracker::structs::tracker_context::TrackerContext;
use crate::tracker::traits::peer_store::PeerStore;
use crate::tracker::traits::random_source::RandomSource;
use crate::udp::structs::connection_id_manager::ConnectionIdManager;

/// Connection ids live this long when no UDP listener configures it.
pub const DEFAULT_CONNECTION_ID_LIFETIME: u64 = 120;

impl TrackerContext {
    pub fn new(config: Arc<Configuration>) -> TrackerContext {
        Self::with_random(config, Arc::new(ThreadRandom))
    }

    /// Builds the context around a caller-supplied randomness source.
    pub fn with_random(config: Arc<Configuration>, random: Arc<dyn RandomSource>) -> TrackerContext
    {
        let tracker_config = &config.tracker_config;
        let pools = Arc::new(Pools::new(tracker_config.numwant_limit as usize));
        let stats = Arc::new(StatsAtomics::new(current_time()));
        let store: Arc<dyn PeerStore> = Arc::new(MemoryPeerStore::new(
            Arc::clone(&pools),
            Arc::clone(&stats),
            Arc::clone(&random),
            tracker_config.min_leechers,
            tracker_config.fast_mode,
        ));
        let announce = AnnounceService::new(
            Arc::clone(&store),
            Arc::clone(&pools),
            Arc::clone(&stats),
            Arc::clone(&random),
            tracker_config,
        );
        let scrape = ScrapeService::new(Arc::clone(&store), Arc::clone(&stats));
        let lifetime = config.udp_server.iter()
            .find(|udp| udp.enabled)
            .map(|udp| udp.connection_id_lifetime)
            .unwrap_or(DEFAULT_CONNECTION_ID_LIFETIME);

        TrackerContext {
            pools,
            store,
            stats,
            random,
            announce,
            scrape,
            connection_ids: ConnectionIdManager::new(lifetime),
            config,
        }
    }

    pub fn expiry_manager(&self) -> ExpiryManager {
        ExpiryManager::new(
            Arc::clone(&self.store),
            Arc::clone(&self.stats),
            Duration::from_secs(self.config.tracker_config.peers_cleanup_interval),
            Duration::from_secs(self.config.tracker_config.peers_timeout),
        )
    }
}
