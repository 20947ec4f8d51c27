use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("snapshot decode: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("snapshot decompress: {0}")]
    Compression(String),
    #[error("snapshot task failed: {0}")]
    Task(String),
}
