use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Base announce interval in seconds.
    pub announce_interval: u64,
    /// Upper bound (exclusive) of the random seconds added to the interval, 0 disables it.
    pub announce_fuzz: u64,
    pub numwant_default: u32,
    pub numwant_limit: u32,
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
    /// Incomplete peers a swarm must have had at the previous update before a peer can be flagged.
    pub min_leechers: u32,
    /// Skips global seed/leech and per-address bookkeeping.
    pub fast_mode: bool,
    /// `ip:port` endpoints treated as trusted seeds.
    pub baseline_providers: Vec<String>,
}
