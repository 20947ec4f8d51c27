pub mod file_backup;
pub mod no_backup;
