use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_tracker::backup::backup::{backup_service, backup_target, restore_backup, save_backup_blocking};
use swarm_tracker::common::common::setup_logging;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::tracker_context::TrackerContext;
use swarm_tracker::udp::udp::udp_service;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.config.clone(), args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[BOOT] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let ctx = Arc::new(TrackerContext::new(config.clone()));
            let backup = backup_target(&config.backup);

            let restore_store = ctx.store.clone();
            let restore_target = backup.clone();
            match tokio::task::spawn_blocking(move || restore_backup(restore_store.as_ref(), restore_target.as_ref())).await {
                Ok(Ok(_)) => {}
                Ok(Err(error)) => warn!("[BACKUP] Could not restore from {}, starting empty: {error}", backup.describe()),
                Err(error) => warn!("[BACKUP] Restore task failed, starting empty: {error}"),
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let expiry = Arc::new(ctx.expiry_manager());
            info!("[BOOT] Starting expiry every {} seconds...", expiry.interval().as_secs());
            tokio::spawn(expiry.run(tokio_shutdown.clone()));

            if config.backup.enabled && config.backup.interval > 0 {
                tokio::spawn(backup_service(
                    ctx.store.clone(),
                    backup.clone(),
                    Duration::from_secs(config.backup.interval),
                    tokio_shutdown.clone()
                ));
            }

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in config.http_server.iter().filter(|http| http.enabled) {
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                match http_service(address, ctx.clone(), Arc::new(http_server_object.clone())).await {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to bind to {address}: {error}");
                        exit(1);
                    }
                }
            }
            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server stopped with an error: {error}");
                    }
                });
            }

            let (udp_tx, udp_rx) = tokio::sync::watch::channel(false);
            let mut udp_futures = Vec::new();
            for udp_server_object in config.udp_server.iter().filter(|udp| udp.enabled) {
                match udp_service(udp_server_object, ctx.clone(), udp_rx.clone()).await {
                    Ok(handle) => udp_futures.push(handle),
                    Err(error) => {
                        error!("[UDP] Unable to bind to {}: {error}", udp_server_object.bind_address);
                        exit(1);
                    }
                }
            }

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            let _ = udp_tx.send(true);
            if let Err(error) = try_join_all(udp_futures).await {
                error!("Errors happened on shutting down UDP sockets: {error}");
            }
            for handle in &http_handles {
                handle.stop(true).await;
            }

            tokio_shutdown.handle().await;

            if config.backup.enabled && config.backup.save_on_shutdown {
                info!("Saving final snapshot...");
                if let Err(error) = save_backup_blocking(ctx.store.clone(), backup.clone()).await {
                    error!("[BACKUP] Final save failed: {error}");
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
