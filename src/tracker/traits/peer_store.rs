use std::fmt::Debug;
use crate::backup::enums::backup_error::BackupError;
use crate::tracker::enums::baseline_hint::BaselineHint;
use crate::tracker::enums::store_error::StoreError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_update::PeerUpdate;
use crate::tracker::structs::trim_stats::TrimStats;

/// Swarm-indexed peer registry, safe under any number of concurrent callers.
///
/// Every operation is total: an unknown hash reads as an empty swarm. The
/// only miss that is reported is [`PeerStore::baseline_provider`].
pub trait PeerStore: Send + Sync + Debug {
    /// Creates or refreshes `peer_id` in the swarm of `info_hash`.
    ///
    /// Returns `true` when the bad-actor heuristic flags the update: the peer
    /// is still incomplete, its uploaded total did not move while its
    /// downloaded total grew, and the swarm had at least `min_leechers`
    /// incomplete peers when this peer last announced. Nothing is enforced here.
    fn save(&self, info_hash: InfoHash, peer_id: PeerId, update: &PeerUpdate) -> bool;

    /// Removes a peer. Absent peers and unknown hashes are a no-op.
    fn drop_peer(&self, info_hash: &InfoHash, peer_id: &PeerId, baseline_provider: bool);

    /// `(complete, incomplete)`, `(0, 0)` for an unknown hash.
    fn hash_stats(&self, info_hash: &InfoHash) -> (u32, u32);

    /// Up to `numwant` bencoded `{peer id, ip, port}` dictionaries.
    fn peer_list(&self, info_hash: &InfoHash, numwant: usize, include_peer_id: bool) -> Vec<Vec<u8>>;

    /// Fills `ipv4` and `ipv6` with up to `numwant` compact peers in total.
    ///
    /// Both buffers are cleared first and each is bounded by the capacity it
    /// arrives with; enumeration stops as soon as a peer does not fit its
    /// family's buffer. Returns the number of peers written.
    fn peer_list_bytes(&self, info_hash: &InfoHash, numwant: usize, ipv4: &mut Vec<u8>, ipv6: &mut Vec<u8>) -> usize;

    /// One uniformly chosen baseline provider, compact or as a bencoded
    /// dictionary shaped like a [`PeerStore::peer_list`] entry.
    fn baseline_provider(&self, info_hash: &InfoHash, compact: bool, include_peer_id: bool) -> Result<BaselineHint, StoreError>;

    /// Removes peers and baseline providers with `now - last_seen > timeout`
    /// and swarms left without peers.
    fn trim(&self, now: i64, timeout: i64) -> TrimStats;

    /// Number of swarms.
    fn hashes(&self) -> usize;

    /// Number of peers across all swarms.
    fn peers(&self) -> usize;

    fn encode_snapshot(&self) -> Result<Vec<u8>, BackupError>;

    /// Loads a snapshot, returning `(peers, hashes)` inserted.
    fn decode_snapshot(&self, bytes: &[u8]) -> Result<(usize, usize), BackupError>;
}
