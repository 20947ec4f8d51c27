use std::net::IpAddr;

/// A peer record, exclusively owned by its swarm and recycled through
/// `Pools::peers` once removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peer {
    pub ip: IpAddr,
    pub port: u16,
    /// Seeding rather than leeching.
    pub complete: bool,
    /// Unix seconds of the latest announce.
    pub last_seen: i64,
    /// Highest uploaded total ever reported.
    pub uploaded: u64,
    /// Highest downloaded total ever reported.
    pub downloaded: u64,
    /// Swarm incomplete count observed at the previous update.
    pub leechers_last_time: u32,
}
