use std::net::SocketAddr;

/// A received datagram waiting for a worker.
pub struct PacketJob {
    pub(crate) data: Vec<u8>,
    pub(crate) remote_addr: SocketAddr,
}
