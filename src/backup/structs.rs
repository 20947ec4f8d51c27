/// Snapshot kept in one file on local disk.
pub mod file_backup;

/// Target used when backups are disabled.
pub mod no_backup;
