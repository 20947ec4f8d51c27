use crate::udp::structs::transaction_id::TransactionId;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub transaction_id: TransactionId,
    pub announce_interval: i32,
    pub leechers: i32,
    pub seeders: i32,
    /// Compact peers, 6 bytes each for IPv4 replies and 18 for IPv6.
    pub peers: Vec<u8>,
}
