pub mod stats_atomics;
pub mod ip_stats;
