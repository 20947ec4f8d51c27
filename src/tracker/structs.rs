//! Data structures for tracker operations.

/// 20-byte torrent info hash, the swarm key.
pub mod info_hash;

/// 20-byte client identifier, the peer key inside a swarm.
pub mod peer_id;

/// One peer record as stored in a swarm.
pub mod peer;

/// Peers, baseline providers and seed/leech counters of one info hash.
pub mod swarm;

/// Fields written by a single `PeerStore::save` call.
pub mod peer_update;

/// In-memory two-level-locked peer store.
pub mod memory_peer_store;

/// Totals removed by one expiry sweep.
pub mod trim_stats;

/// Parsed announce fields handed over by a transport.
pub mod announce_query_request;

/// Result of a successful (non-stopped) announce.
pub mod announce_result;

/// Seed/leech numbers for one scraped hash.
pub mod scrape_entry;

/// Announce decision logic.
pub mod announce_service;

/// Scrape decision logic.
pub mod scrape_service;

/// Periodic trimming of stale peers and empty swarms.
pub mod expiry_manager;

/// Process-wide runtime context shared by the transports.
pub mod tracker_context;

/// Randomness backed by the thread-local generator.
pub mod thread_random;

/// Deterministic randomness replaying a fixed sequence.
pub mod sequence_random;

/// Serialized form of one swarm inside a store snapshot.
pub mod swarm_snapshot;

/// Serialized form of one peer inside a store snapshot.
pub mod peer_snapshot;
