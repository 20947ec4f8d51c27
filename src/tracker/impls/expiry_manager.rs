use std::sync::Arc;
use std::time::Duration;
use log::{error, info};
use tokio_shutdown::Shutdown;
use crate::common::common::{current_time, shutdown_waiting};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::expiry_manager::ExpiryManager;
use crate::tracker::structs::trim_stats::TrimStats;
use crate::tracker::traits::peer_store::PeerStore;

impl ExpiryManager {
    pub fn new(store: Arc<dyn PeerStore>, stats: Arc<StatsAtomics>, interval: Duration, timeout: Duration) -> ExpiryManager
    {
        ExpiryManager {
            store,
            stats,
            interval,
            timeout: timeout.as_secs() as i64,
        }
    }

    /// One trimming pass at `now`, with the stats counters updated.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn sweep(&self, now: i64) -> TrimStats {
        let totals = self.store.trim(now, self.timeout);
        self.stats.update_stats(StatsEvent::ExpiredPeers, totals.peers as i64);
        self.stats.update_stats(StatsEvent::ExpiredHashes, totals.hashes as i64);
        if totals.peers > 0 || totals.hashes > 0 {
            info!(
                "[EXPIRY] Removed {} peers, {} baseline providers and {} hashes",
                totals.peers, totals.baseline_providers, totals.hashes
            );
        }
        totals
    }

    /// Sweeps on a fixed period until shutdown. The trim runs on the blocking
    /// pool so a large store does not stall the runtime.
    pub async fn run(self: Arc<Self>, shutdown: Shutdown) {
        info!("[EXPIRY] Sweeping every {} seconds, peer timeout {} seconds", self.interval.as_secs(), self.timeout);
        loop {
            if shutdown_waiting(self.interval, shutdown.clone()).await {
                info!("[EXPIRY] Shutting down");
                return;
            }
            let manager = Arc::clone(&self);
            if let Err(e) = tokio::task::spawn_blocking(move || manager.sweep(current_time())).await {
                error!("[EXPIRY] Sweep failed: {e}");
            }
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
