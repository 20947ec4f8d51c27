/// The peer store contract.
pub mod peer_store;

/// Injectable randomness.
pub mod random_source;
