//! HTTP tracker protocol (BEP 3, BEP 23, BEP 7).
//!
//! # Supported Endpoints
//!
//! - `/announce` - register a peer and receive peers of the swarm
//! - `/scrape` - seed/leech numbers, `info_hash` may repeat
//! - `/stats` - JSON view of the tracker counters
//!
//! Replies are bencoded dictionaries; client errors come back as
//! `failure reason` with status 200 so every client can read them.
//! The requester address is taken from the configured real-ip header when
//! present, otherwise from the socket.

/// Shared state handed to the actix workers.
pub mod structs;

/// Routes, handlers and server bootstrap.
#[allow(clippy::module_inception)]
pub mod http;
