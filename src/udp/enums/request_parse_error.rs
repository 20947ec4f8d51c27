use std::borrow::Cow;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

#[derive(Debug, PartialEq, Eq)]
pub enum RequestParseError {
    /// The header was readable, so the client can be told what went wrong.
    Sendable {
        connection_id: ConnectionId,
        transaction_id: TransactionId,
        err: Cow<'static, str>,
    },
    /// Nothing to reply to; the datagram is dropped.
    Unsendable {
        err: Cow<'static, str>,
    },
}
