use std::sync::Arc;
use crossbeam::queue::ArrayQueue;
use crate::udp::structs::packet_job::PacketJob;

/// Bounded queue between the receive tasks and the worker tasks.
pub struct ParsePool {
    pub payload: Arc<ArrayQueue<PacketJob>>,
}
