use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UdpTrackersConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub udp_threads: usize,
    pub worker_threads: usize,
    pub queue_size: usize,
    pub receive_buffer_size: usize,
    pub send_buffer_size: usize,
    pub reuse_address: bool,
    /// Seconds a connection id stays valid, at most twice this in practice.
    pub connection_id_lifetime: u64,
    /// Trust the IPv4 address field of announce packets instead of the source address.
    #[serde(default)]
    pub use_payload_ip: bool,
}
