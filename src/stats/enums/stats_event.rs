//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Counter selector for `StatsAtomics::update_stats`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Connects,
    Announces,
    Scrapes,
    ClientErrors,
    ServerErrors,
    Seeds,
    Leeches,
    BadActors,
    ExpiredPeers,
    ExpiredHashes,
    UdpQueueDrops,
}
