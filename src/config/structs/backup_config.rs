use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BackupConfig {
    pub enabled: bool,
    pub path: String,
    /// Seconds between periodic snapshots, 0 saves only on shutdown.
    pub interval: u64,
    pub save_on_shutdown: bool,
}
