use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpTrackersConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub threads: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    /// Header carrying the client address when behind a proxy, empty to use the socket peer.
    pub real_ip: String,
}
