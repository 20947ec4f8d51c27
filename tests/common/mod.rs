#![allow(dead_code)]
use rand::RngExt;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::peer_update::PeerUpdate;
use swarm_tracker::tracker::structs::sequence_random::SequenceRandom;
use swarm_tracker::tracker::structs::tracker_context::TrackerContext;

pub type TestContext = Arc<TrackerContext>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.tracker_config.announce_fuzz = 0;
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        threads: 1,
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        real_ip: String::new(),
    })
}

pub fn create_test_context() -> TestContext {
    Arc::new(TrackerContext::with_random(create_test_config(), Arc::new(SequenceRandom::new(vec![0]))))
}

pub fn random_info_hash() -> InfoHash {
    InfoHash(rand::rng().random::<[u8; 20]>())
}

pub fn random_peer_id() -> PeerId {
    PeerId(rand::rng().random::<[u8; 20]>())
}

pub fn peer_update(n: u32, complete: bool, now: i64) -> PeerUpdate {
    PeerUpdate {
        ip: IpAddr::V4(Ipv4Addr::from(0x0a00_0000 + n)),
        port: 6881,
        complete,
        uploaded: 0,
        downloaded: 0,
        now,
        baseline_provider: false,
    }
}

/// Percent-encodes every byte, as clients do for raw hashes.
pub fn url_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("%{b:02X}")).collect()
}
