//! Tracker statistics.
//!
//! Atomic counters updated from every worker thread without locking, plus a
//! reference-counted map of announcing addresses used to report unique IPs.
//! The seed/leech counters and the address map are skipped entirely when
//! `tracker_config.fast_mode` is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::Announces, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Statistics data structures.
pub mod structs;

/// Implementation blocks for statistics operations.
pub mod impls;

#[cfg(test)]
mod tests;
