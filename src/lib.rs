//! # Swarm Tracker
//!
//! An in-memory BitTorrent tracker answering announce and scrape requests
//! over HTTP (BEP 3, BEP 23, BEP 7) and UDP (BEP 15).
//!
//! ## Overview
//!
//! Every swarm lives in a [`tracker::structs::memory_peer_store::MemoryPeerStore`]
//! behind two levels of locking: a store-wide map lock held only long enough
//! to find or create a swarm, and a lock per swarm for its peers. Announce
//! and scrape validation lives in the tracker services so both transports
//! share the same rules and error texts.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::tracker_context::TrackerContext;
//!
//! let ctx = TrackerContext::new(Arc::new(Configuration::init()));
//! assert_eq!(ctx.store.hashes(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`backup`] - snapshot persistence of the whole store
//! - [`common`] - query parsing, logging setup, time and shutdown helpers
//! - [`config`] - TOML configuration
//! - [`http`] - HTTP tracker protocol
//! - [`pool`] - object pools for peers and reply buffers
//! - [`stats`] - atomic counters
//! - [`structs`] - CLI arguments
//! - [`tracker`] - peer store, expiry and the announce/scrape services
//! - [`udp`] - UDP tracker protocol

/// Snapshot persistence targets and the periodic save task.
pub mod backup;

/// Common utilities and shared functionality.
///
/// Contains query parsing, logging setup and the helpers shared by the
/// background tasks.
pub mod common;

/// Configuration management module.
pub mod config;

/// HTTP tracker protocol implementation.
pub mod http;

/// Object pools.
pub mod pool;

/// Statistics module.
///
/// Lock-free counters updated from every transport, plus the per-address
/// reference counts behind the unique IP figure.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic.
pub mod tracker;

/// UDP tracker protocol implementation (BEP 15).
pub mod udp;
