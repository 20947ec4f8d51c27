//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Announce, numwant, expiry and baseline-provider settings.
pub mod tracker_config;

/// UDP listener configuration (address, threads, socket buffers, connection id lifetime).
pub mod udp_trackers_config;

/// HTTP listener configuration (address, threads, timeouts).
pub mod http_trackers_config;

/// Peer store snapshot persistence.
pub mod backup_config;
