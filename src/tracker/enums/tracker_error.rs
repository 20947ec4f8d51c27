use std::borrow::Cow;
use thiserror::Error;

/// Validation and processing failures of the announce and scrape services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Malformed or out-of-range request field, answered with a protocol error.
    #[error("{0}")]
    ClientError(Cow<'static, str>),
    /// Internal failure, logged and answered with a generic message.
    #[error("{0}")]
    ServerError(Cow<'static, str>),
}
