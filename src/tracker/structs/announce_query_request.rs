use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;

/// Announce fields as decoded by a transport, before validation.
///
/// Identifiers arrive as raw slices so that length checks happen in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceQueryRequest<'a> {
    pub info_hash: &'a [u8],
    pub peer_id: &'a [u8],
    /// Reported port; anything outside `1..=65535` is a client error.
    pub port: i64,
    pub event: AnnounceEvent,
    /// `None` selects the configured default, negative values are rejected.
    pub numwant: Option<i64>,
    pub uploaded: u64,
    pub downloaded: u64,
    /// Bytes still missing, `None` when the client did not say.
    pub left: Option<u64>,
    pub compact: bool,
    pub no_peer_id: bool,
    pub remote_ip: IpAddr,
}
