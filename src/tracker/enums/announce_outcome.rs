use crate::tracker::structs::announce_result::AnnounceResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnounceOutcome {
    /// The peer left; nothing to list and no swarm was created.
    Stopped,
    Announced(AnnounceResult),
}
