//! Common utilities and shared functionality.
//!
//! Helpers used across the tracker: query-string parsing for the HTTP
//! transport, logging setup, wall-clock timestamps and the boot-level
//! `CustomError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::common::common::{parse_query, current_time};
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&port=6881")))?;
//! let now = current_time();
//! ```

/// Common data structures (boot-level errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
