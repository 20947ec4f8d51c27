use std::borrow::Cow;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_outcome::AnnounceOutcome;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::tracker_context::TrackerContext;
use crate::udp::enums::request::Request;
use crate::udp::enums::request_parse_error::RequestParseError;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::packet_job::PacketJob;
use crate::udp::structs::parse_pool::ParsePool;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::RECEIVE_BUFFER_SIZE;

impl UdpServer {
    #[tracing::instrument(level = "debug", skip(ctx, config))]
    pub async fn new(ctx: Arc<TrackerContext>, bind_address: SocketAddr, config: &UdpTrackersConfig) -> io::Result<UdpServer>
    {
        let socket = Socket::new(Domain::for_address(bind_address), Type::DGRAM, Some(Protocol::UDP))?;
        if let Err(e) = socket.set_recv_buffer_size(config.receive_buffer_size) {
            warn!("[UDP] Could not set receive buffer size on {bind_address}: {e}");
        }
        if let Err(e) = socket.set_send_buffer_size(config.send_buffer_size) {
            warn!("[UDP] Could not set send buffer size on {bind_address}: {e}");
        }
        socket.set_reuse_address(config.reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        info!(
            "[UDP] Socket {bind_address} buffers - Recv: {} bytes, Send: {} bytes",
            sock_ref.recv_buffer_size().unwrap_or(0),
            sock_ref.send_buffer_size().unwrap_or(0)
        );

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            ctx,
            parse_pool: Arc::new(ParsePool::new(config.queue_size)),
            udp_threads: config.udp_threads.max(1),
            worker_threads: config.worker_threads.max(1),
            use_payload_ip: config.use_payload_ip,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs the receive and worker tasks until `rx` flips.
    pub async fn start(&self, rx: tokio::sync::watch::Receiver<bool>)
    {
        let workers = self.parse_pool.start_thread(
            self.worker_threads,
            self.ctx.clone(),
            self.socket.clone(),
            rx.clone(),
            self.use_payload_ip,
        );

        let mut receivers = Vec::with_capacity(self.udp_threads);
        for thread_id in 0..self.udp_threads {
            let socket = self.socket.clone();
            let parse_pool = self.parse_pool.clone();
            let ctx = self.ctx.clone();
            let mut rx = rx.clone();

            receivers.push(tokio::spawn(async move {
                let mut data = vec![0u8; RECEIVE_BUFFER_SIZE];
                loop {
                    tokio::select! {
                        _ = rx.changed() => {
                            info!("[UDP] Stopping receive thread {thread_id}...");
                            break;
                        }
                        result = socket.recv_from(&mut data) => {
                            match result {
                                Ok((valid_bytes, remote_addr)) => {
                                    let job = PacketJob {
                                        data: data[..valid_bytes].to_vec(),
                                        remote_addr,
                                    };
                                    if !parse_pool.push(job) {
                                        ctx.stats.update_stats(StatsEvent::UdpQueueDrops, 1);
                                    }
                                }
                                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                                    tokio::task::yield_now().await;
                                }
                                Err(e) => {
                                    debug!("[UDP] Receive thread {thread_id} recv_from error: {e}");
                                }
                            }
                        }
                    }
                }
            }));
        }

        for handle in receivers.into_iter().chain(workers) {
            let _ = handle.await;
        }
    }

    /// Encodes into a pooled buffer and sends; peer buffers go back to their pools afterwards.
    pub async fn send_response(ctx: &TrackerContext, socket: &UdpSocket, remote_addr: SocketAddr, response: Response)
    {
        let mut buffer = ctx.pools.encoders.get();
        match response.write(&mut buffer) {
            Ok(()) => {
                if let Err(e) = socket.send_to(&buffer, remote_addr).await {
                    debug!("[UDP] Could not send {} bytes to {remote_addr}: {e}", buffer.len());
                }
            }
            Err(e) => {
                let error = TrackerError::server(format!("could not encode response for {remote_addr}: {e}"));
                ctx.stats.update_stats(error.stats_event(), 1);
                error!("[UDP] {error}");
            }
        }
        ctx.pools.encoders.put(buffer);
        response.recycle(&ctx.pools);
    }

    /// Decodes one datagram and produces the reply, `None` when the packet is dropped.
    ///
    /// Connection ids are checked before anything else is looked at, so an
    /// unknown action or a malformed body from an unconnected endpoint is
    /// answered with "bad connid".
    #[tracing::instrument(level = "debug", skip(payload, ctx))]
    pub fn handle_packet(remote_addr: SocketAddr, payload: &[u8], ctx: &TrackerContext, use_payload_ip: bool, now: i64) -> Option<Response>
    {
        match Request::from_bytes(payload) {
            Ok(Request::Connect(request)) => Some(Self::handle_udp_connect(remote_addr, &request, ctx, now)),
            Ok(Request::Announce(request)) => {
                if !ctx.connection_ids.verify(request.connection_id, &remote_addr, now) {
                    return Some(Self::client_error(ctx, request.transaction_id, "bad connid"));
                }
                Some(Self::handle_udp_announce(remote_addr, &request, ctx, use_payload_ip, now))
            }
            Ok(Request::Scrape(request)) => {
                if !ctx.connection_ids.verify(request.connection_id, &remote_addr, now) {
                    return Some(Self::client_error(ctx, request.transaction_id, "bad connid"));
                }
                Some(Self::handle_udp_scrape(&request, ctx))
            }
            Err(RequestParseError::Sendable { connection_id, transaction_id, err }) => {
                if !ctx.connection_ids.verify(connection_id, &remote_addr, now) {
                    return Some(Self::client_error(ctx, transaction_id, "bad connid"));
                }
                Some(Self::client_error(ctx, transaction_id, err))
            }
            Err(RequestParseError::Unsendable { err }) => {
                debug!("[UDP] Dropping packet from {remote_addr}: {err}");
                None
            }
        }
    }

    pub fn handle_udp_connect(remote_addr: SocketAddr, request: &ConnectRequest, ctx: &TrackerContext, now: i64) -> Response {
        ctx.stats.update_stats(StatsEvent::Connects, 1);
        Response::from(ConnectResponse {
            transaction_id: request.transaction_id,
            connection_id: ctx.connection_ids.issue(&remote_addr, now),
        })
    }

    pub fn handle_udp_announce(remote_addr: SocketAddr, request: &AnnounceRequest, ctx: &TrackerContext, use_payload_ip: bool, now: i64) -> Response {
        if request.port == 0 {
            return Self::client_error(ctx, request.transaction_id, "bad port");
        }

        let ip = match request.ip_address {
            Some(ip) if use_payload_ip => IpAddr::V4(ip),
            _ => remote_addr.ip(),
        };
        // peers follow the family the reply travels over
        let ipv4 = remote_addr.ip().to_canonical().is_ipv4();

        let query = AnnounceQueryRequest {
            info_hash: &request.info_hash.0,
            peer_id: &request.peer_id.0,
            port: request.port as i64,
            event: request.event,
            numwant: (request.peers_wanted >= 1).then_some(request.peers_wanted as i64),
            uploaded: request.bytes_uploaded.max(0) as u64,
            downloaded: request.bytes_downloaded.max(0) as u64,
            left: u64::try_from(request.bytes_left).ok(),
            compact: true,
            no_peer_id: true,
            remote_ip: ip,
        };

        let (announce_interval, leechers, seeders, peers) = match ctx.announce.announce(&query, now) {
            Ok(AnnounceOutcome::Stopped) => (-1, -1, -1, Vec::new()),
            Ok(AnnounceOutcome::Announced(result)) => (
                result.interval as i32,
                result.incomplete as i32,
                result.complete as i32,
                result.into_compact(&ctx.pools, ipv4),
            ),
            Err(e) => return Self::service_error(request.transaction_id, &e),
        };

        let response = AnnounceResponse {
            transaction_id: request.transaction_id,
            announce_interval,
            leechers,
            seeders,
            peers,
        };
        if ipv4 {
            Response::AnnounceIpv4(response)
        } else {
            Response::AnnounceIpv6(response)
        }
    }

    pub fn handle_udp_scrape(request: &ScrapeRequest, ctx: &TrackerContext) -> Response {
        match ctx.scrape.scrape(&request.info_hashes) {
            Ok(entries) => Response::from(ScrapeResponse {
                transaction_id: request.transaction_id,
                torrent_stats: entries.iter().map(|entry| TorrentScrapeStatistics {
                    seeders: entry.complete as i32,
                    completed: entry.downloaded,
                    leechers: entry.incomplete as i32,
                }).collect(),
            }),
            Err(e) => Self::service_error(request.transaction_id, &e),
        }
    }

    /// Errors raised by the transport itself; service errors are counted by the services.
    fn client_error(ctx: &TrackerContext, transaction_id: TransactionId, message: impl Into<Cow<'static, str>>) -> Response {
        ctx.stats.update_stats(StatsEvent::ClientErrors, 1);
        Response::error(transaction_id, message)
    }

    fn service_error(transaction_id: TransactionId, error: &TrackerError) -> Response {
        if !error.is_client_error() {
            error!("[UDP] Internal error: {error}");
        }
        Response::error(transaction_id, error.public_message())
    }
}
