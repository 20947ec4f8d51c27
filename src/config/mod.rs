//! Configuration management module.
//!
//! Loads, validates and writes the tracker configuration stored as TOML.
//!
//! # Configuration Structure
//!
//! - **log_level**: fern/log level filter
//! - **tracker_config**: announce timing, numwant bounds, expiry, bad-actor threshold,
//!   fast mode and the trusted baseline providers
//! - **udp_server**: UDP listener instances
//! - **http_server**: HTTP listener instances
//! - **backup**: snapshot persistence of the peer store
//!
//! The file path comes from `--config`, then the `SWARM_TRACKER_CONFIG`
//! environment variable, then `config.toml` in the working directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(None, false)?;
//! assert!(config.tracker_config.numwant_default <= config.tracker_config.numwant_limit);
//! ```

/// Configuration enumerations (error kinds).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
