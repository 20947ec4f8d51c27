//! Core tracker logic.
//!
//! The swarm-indexed peer store and the transport-agnostic announce/scrape
//! decisions built on it.
//!
//! # Architecture
//!
//! - [`traits::peer_store::PeerStore`] is the store contract; the
//!   [`structs::memory_peer_store::MemoryPeerStore`] implementation keeps
//!   every swarm in memory behind two levels of locks.
//! - [`structs::announce_service::AnnounceService`] and
//!   [`structs::scrape_service::ScrapeService`] validate parsed request fields
//!   and produce structured results for the transports to encode.
//! - [`structs::expiry_manager::ExpiryManager`] periodically trims stale peers
//!   and empty swarms.
//! - [`structs::tracker_context::TrackerContext`] wires the pieces together at
//!   startup and is handed to every transport.
//!
//! # Lock order
//!
//! The store-wide lock guards only the hash to swarm map. It is always
//! released before a swarm lock is taken, and no code path holds both, so
//! requests against different swarms never wait on each other.

/// Tracker data structures.
pub mod structs;

/// Tracker enumerations (events, outcomes, errors).
pub mod enums;

/// Implementation blocks for tracker types.
pub mod impls;

/// Store and randomness contracts.
pub mod traits;

/// Collection type aliases.
pub mod types;

#[cfg(test)]
mod tests;
