//! Store snapshots.
//!
//! The whole peer store can be written out as a compressed MessagePack
//! snapshot and read back on the next start, so a restart does not empty
//! every swarm. Where the bytes go is behind the [`traits::backup::Backup`]
//! trait; [`structs::file_backup::FileBackup`] writes a single file and
//! replaces it atomically.

/// Backup error enumeration.
pub mod enums;

/// Backup targets.
pub mod structs;

/// Implementation blocks for backup targets.
pub mod impls;

/// Snapshot storage contract.
pub mod traits;

/// Load, save and periodic snapshot service.
#[allow(clippy::module_inception)]
pub mod backup;

#[cfg(test)]
mod tests;
