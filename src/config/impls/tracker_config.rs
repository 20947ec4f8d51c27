use std::net::SocketAddr;
use crate::config::structs::tracker_config::TrackerConfig;

impl TrackerConfig {
    /// Parsed baseline provider endpoints; entries that do not parse are skipped,
    /// `Configuration::validate` reports them at boot.
    pub fn baseline_provider_addrs(&self) -> Vec<SocketAddr> {
        self.baseline_providers.iter().filter_map(|provider| provider.parse().ok()).collect()
    }
}
