use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::config::structs::udp_trackers_config::UdpTrackersConfig;
use crate::tracker::structs::tracker_context::TrackerContext;
use crate::udp::structs::udp_server::UdpServer;

pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;
/// Largest UDP payload, so no datagram is ever truncated before parsing.
pub const RECEIVE_BUFFER_SIZE: usize = 65_507;

pub const ACTION_CONNECT: i32 = 0;
pub const ACTION_ANNOUNCE: i32 = 1;
pub const ACTION_SCRAPE: i32 = 2;
pub const ACTION_ERROR: i32 = 3;

/// Binds one configured listener and starts its receive and worker tasks on the current runtime.
pub async fn udp_service(config: &UdpTrackersConfig, ctx: Arc<TrackerContext>, rx: tokio::sync::watch::Receiver<bool>) -> io::Result<JoinHandle<()>>
{
    let addr: SocketAddr = config.bind_address.parse().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let connection_id_lifetime = ctx.connection_ids.lifetime();
    let udp_server = UdpServer::new(ctx, addr, config).await?;
    info!(
        "[UDP] Starting a server listener on {addr} with {} UDP threads and {} worker threads, connection ids valid for {connection_id_lifetime}s",
        config.udp_threads, config.worker_threads
    );
    Ok(tokio::spawn(async move {
        udp_server.start(rx).await;
    }))
}
