use std::ops::AddAssign;
use crate::tracker::structs::trim_stats::TrimStats;

impl AddAssign for TrimStats {
    fn add_assign(&mut self, other: TrimStats) {
        self.peers += other.peers;
        self.baseline_providers += other.baseline_providers;
        self.hashes += other.hashes;
    }
}
