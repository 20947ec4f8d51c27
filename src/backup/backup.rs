use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{error, info};
use tokio_shutdown::Shutdown;
use crate::backup::enums::backup_error::BackupError;
use crate::backup::structs::file_backup::FileBackup;
use crate::backup::structs::no_backup::NoBackup;
use crate::backup::traits::backup::Backup;
use crate::common::common::shutdown_waiting;
use crate::config::structs::backup_config::BackupConfig;
use crate::tracker::traits::peer_store::PeerStore;

/// The configured target, [`NoBackup`] when backups are off.
pub fn backup_target(config: &BackupConfig) -> Arc<dyn Backup> {
    if config.enabled {
        Arc::new(FileBackup::new(&config.path))
    } else {
        Arc::new(NoBackup)
    }
}

/// Loads the stored snapshot into `store`, returning `(peers, hashes)`.
/// A target without a snapshot loads nothing.
pub fn restore_backup(store: &dyn PeerStore, backup: &dyn Backup) -> Result<(usize, usize), BackupError>
{
    let Some(bytes) = backup.load()? else {
        info!("[BACKUP] No snapshot found at {}", backup.describe());
        return Ok((0, 0));
    };
    let started = Instant::now();
    let (peers, hashes) = store.decode_snapshot(&bytes)?;
    info!(
        "[BACKUP] Restored {peers} peers in {hashes} hashes from {} ({} bytes, {:?})",
        backup.describe(), bytes.len(), started.elapsed()
    );
    Ok((peers, hashes))
}

/// Encodes the store and hands it to `backup`, returning the snapshot size.
pub fn save_backup(store: &dyn PeerStore, backup: &dyn Backup) -> Result<usize, BackupError>
{
    let started = Instant::now();
    let bytes = store.encode_snapshot()?;
    backup.save(&bytes)?;
    info!("[BACKUP] Saved {} bytes to {} in {:?}", bytes.len(), backup.describe(), started.elapsed());
    Ok(bytes.len())
}

/// [`save_backup`] on the blocking pool.
pub async fn save_backup_blocking(store: Arc<dyn PeerStore>, backup: Arc<dyn Backup>) -> Result<usize, BackupError>
{
    tokio::task::spawn_blocking(move || save_backup(store.as_ref(), backup.as_ref()))
        .await
        .map_err(|e| BackupError::Task(e.to_string()))?
}

/// Saves a snapshot every `interval` until shutdown.
pub async fn backup_service(store: Arc<dyn PeerStore>, backup: Arc<dyn Backup>, interval: Duration, shutdown: Shutdown)
{
    info!("[BACKUP] Saving to {} every {} seconds", backup.describe(), interval.as_secs());
    loop {
        if shutdown_waiting(interval, shutdown.clone()).await {
            info!("[BACKUP] Shutting down");
            return;
        }
        if let Err(e) = save_backup_blocking(Arc::clone(&store), Arc::clone(&backup)).await {
            error!("[BACKUP] Periodic save failed: {e}");
        }
    }
}
