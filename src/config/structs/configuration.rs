use serde::{Deserialize, Serialize};
use crate::config::structs::backup_config::BackupConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub tracker_config: TrackerConfig,
    pub udp_server: Vec<UdpTrackersConfig>,
    pub http_server: Vec<HttpTrackersConfig>,
    pub backup: BackupConfig,
}
