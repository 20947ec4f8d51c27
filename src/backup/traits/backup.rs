use crate::backup::enums::backup_error::BackupError;

/// Where snapshots are kept. Calls block and belong on the blocking pool.
#[cfg_attr(test, mockall::automock)]
pub trait Backup: Send + Sync {
    /// Replaces the stored snapshot with `snapshot`.
    fn save(&self, snapshot: &[u8]) -> Result<(), BackupError>;

    /// The stored snapshot, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>, BackupError>;

    /// Human readable location for log lines.
    fn describe(&self) -> String;
}
