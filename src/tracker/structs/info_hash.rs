//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 of a torrent's info dictionary. Displayed and serialized as
/// 40 lowercase hex characters.
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string().len(), 40);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
