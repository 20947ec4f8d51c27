use std::borrow::Cow;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;

pub const INTERNAL_ERROR: &str = "internal err";

impl TrackerError {
    pub fn client(message: &'static str) -> TrackerError {
        TrackerError::ClientError(Cow::Borrowed(message))
    }

    pub fn server(message: impl Into<Cow<'static, str>>) -> TrackerError {
        TrackerError::ServerError(message.into())
    }

    /// Text a client may see: the message itself for client errors, a generic one otherwise.
    pub fn public_message(&self) -> Cow<'static, str> {
        match self {
            TrackerError::ClientError(message) => message.clone(),
            TrackerError::ServerError(_) => Cow::Borrowed(INTERNAL_ERROR),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, TrackerError::ClientError(_))
    }
}

impl TrackerError {
    /// Counter bumped when this error is returned to a client.
    pub fn stats_event(&self) -> StatsEvent {
        match self {
            TrackerError::ClientError(_) => StatsEvent::ClientErrors,
            TrackerError::ServerError(_) => StatsEvent::ServerErrors,
        }
    }
}
