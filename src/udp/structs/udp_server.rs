use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::tracker::structs::tracker_context::TrackerContext;
use crate::udp::structs::parse_pool::ParsePool;

pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) ctx: Arc<TrackerContext>,
    pub(crate) parse_pool: Arc<ParsePool>,
    pub(crate) udp_threads: usize,
    pub(crate) worker_threads: usize,
    pub(crate) use_payload_ip: bool,
}
