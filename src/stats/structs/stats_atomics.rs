use std::sync::atomic::AtomicI64;
use crate::stats::structs::ip_stats::IpStats;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub connects: AtomicI64,
    pub announces: AtomicI64,
    pub scrapes: AtomicI64,
    pub client_errors: AtomicI64,
    pub server_errors: AtomicI64,
    pub seeds: AtomicI64,
    pub leeches: AtomicI64,
    pub bad_actors: AtomicI64,
    pub expired_peers: AtomicI64,
    pub expired_hashes: AtomicI64,
    pub udp_queue_drops: AtomicI64,
    pub ip_stats: IpStats,
}
