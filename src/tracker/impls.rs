pub mod info_hash;
pub mod peer_id;
pub mod peer;
pub mod swarm;
pub mod memory_peer_store;
pub mod memory_peer_store_snapshot;
pub mod trim_stats;
pub mod announce_event;
pub mod announce_result;
pub mod announce_service;
pub mod scrape_service;
pub mod expiry_manager;
pub mod tracker_context;
pub mod thread_random;
pub mod sequence_random;
pub mod tracker_error;
