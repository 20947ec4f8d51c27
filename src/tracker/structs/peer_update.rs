use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerUpdate {
    pub ip: IpAddr,
    pub port: u16,
    pub complete: bool,
    pub uploaded: u64,
    pub downloaded: u64,
    /// Unix seconds stamped into `Peer::last_seen`.
    pub now: i64,
    /// The announcing endpoint is a configured trusted seed.
    pub baseline_provider: bool,
}
