//! Type aliases for tracker collections.

/// Hash map and set keyed with aHash.
pub mod ahash_map;

/// Shared, individually locked swarm.
pub mod swarm_handle;
