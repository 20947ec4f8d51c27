/// Peer list of an announce reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncePeers {
    /// Pooled compact buffers, one per address family.
    Compact { ipv4: Vec<u8>, ipv6: Vec<u8> },
    /// Bencoded dictionaries, one per peer.
    Verbose(Vec<Vec<u8>>),
}
