use crate::tracker::enums::announce_peers::AnnouncePeers;
use crate::tracker::enums::baseline_hint::BaselineHint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResult {
    /// Seconds until the next regular announce, fuzz included.
    pub interval: i64,
    pub complete: u32,
    pub incomplete: u32,
    pub peers: AnnouncePeers,
    /// A trusted seed the client may prefer, in the form of `peers`.
    pub baseline_hint: Option<BaselineHint>,
    /// Outcome of the store's bad-actor heuristic, for external policy.
    pub bad_actor: bool,
}
