use std::net::IpAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::structs::peer_id::PeerId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerSnapshot {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub complete: bool,
    pub last_seen: i64,
    pub uploaded: u64,
    pub downloaded: u64,
}
