use std::net::Ipv4Addr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceRequest {
    pub connection_id: ConnectionId,
    pub transaction_id: TransactionId,
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub bytes_downloaded: i64,
    pub bytes_left: i64,
    pub bytes_uploaded: i64,
    pub event: AnnounceEvent,
    /// `None` when the packet carries 0.0.0.0.
    pub ip_address: Option<Ipv4Addr>,
    pub key: u32,
    /// `-1` (or anything below 1) asks for the default.
    pub peers_wanted: i32,
    pub port: u16,
}
