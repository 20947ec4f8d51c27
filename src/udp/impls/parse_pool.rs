use std::sync::Arc;
use std::time::Duration;
use crossbeam::queue::ArrayQueue;
use log::info;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use crate::common::common::current_time;
use crate::tracker::structs::tracker_context::TrackerContext;
use crate::udp::structs::packet_job::PacketJob;
use crate::udp::structs::parse_pool::ParsePool;
use crate::udp::structs::udp_server::UdpServer;

const BATCH_SIZE: usize = 64;

impl ParsePool {
    pub fn new(capacity: usize) -> ParsePool {
        ParsePool {
            payload: Arc::new(ArrayQueue::new(capacity.max(1))),
        }
    }

    /// Queues a datagram; `false` when the queue is full and the packet was dropped.
    #[inline]
    pub fn push(&self, job: PacketJob) -> bool {
        self.payload.push(job).is_ok()
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Spawns `threads` workers draining the queue in batches until shutdown.
    pub fn start_thread(&self, threads: usize, ctx: Arc<TrackerContext>, socket: Arc<UdpSocket>, shutdown_handler: tokio::sync::watch::Receiver<bool>, use_payload_ip: bool) -> Vec<JoinHandle<()>>
    {
        (0..threads.max(1)).map(|i| {
            let payload = self.payload.clone();
            let ctx = ctx.clone();
            let socket = socket.clone();
            let mut shutdown_handler = shutdown_handler.clone();
            tokio::spawn(async move {
                info!("[UDP] Start Parse Pool thread {i}...");
                let mut batch: Vec<PacketJob> = Vec::with_capacity(BATCH_SIZE);
                let mut interval = tokio::time::interval(Duration::from_micros(100));
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                loop {
                    tokio::select! {
                        biased;
                        _ = shutdown_handler.changed() => {
                            info!("[UDP] Shutting down the Parse Pool thread {i}...");
                            return;
                        }
                        _ = interval.tick() => {
                            while batch.len() < BATCH_SIZE {
                                match payload.pop() {
                                    Some(job) => batch.push(job),
                                    None => break,
                                }
                            }
                            let now = current_time();
                            for job in batch.drain(..) {
                                if let Some(response) = UdpServer::handle_packet(job.remote_addr, &job.data, &ctx, use_payload_ip, now) {
                                    UdpServer::send_response(&ctx, &socket, job.remote_addr, response).await;
                                }
                            }
                        }
                    }
                }
            })
        }).collect()
    }
}
