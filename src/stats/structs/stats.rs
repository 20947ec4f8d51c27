use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub connects: i64,
    pub announces: i64,
    pub scrapes: i64,
    pub client_errors: i64,
    pub server_errors: i64,
    pub seeds: i64,
    pub leeches: i64,
    pub bad_actors: i64,
    pub expired_peers: i64,
    pub expired_hashes: i64,
    pub udp_queue_drops: i64,
    pub unique_ips: i64,
}
