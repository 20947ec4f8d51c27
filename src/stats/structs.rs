//! Statistics data structures.

/// Snapshot of current statistics values.
pub mod stats;

/// Atomic counters for thread-safe statistics updates.
pub mod stats_atomics;

/// Reference counts of announcing addresses.
pub mod ip_stats;
