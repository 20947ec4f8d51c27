pub mod backup_error;
