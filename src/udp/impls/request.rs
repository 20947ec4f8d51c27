use std::io;
use std::io::{Cursor, Read, Write};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::enums::request::Request;
use crate::udp::enums::request_parse_error::RequestParseError;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_SCRAPE, PROTOCOL_IDENTIFIER};

/// Fixed announce size: 16 header bytes plus 82 bytes of fields.
pub const ANNOUNCE_REQUEST_SIZE: usize = 98;

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceRequest> for Request {
    fn from(r: AnnounceRequest) -> Self {
        Self::Announce(r)
    }
}

impl From<ScrapeRequest> for Request {
    fn from(r: ScrapeRequest) -> Self {
        Self::Scrape(r)
    }
}

impl Request {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_i64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Announce(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(ACTION_ANNOUNCE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                bytes.write_all(&r.info_hash.0)?;
                bytes.write_all(&r.peer_id.0)?;

                bytes.write_i64::<NetworkEndian>(r.bytes_downloaded)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_left)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_uploaded)?;

                bytes.write_i32::<NetworkEndian>(r.event.to_i32())?;

                bytes.write_all(&r.ip_address.map_or([0; 4], |ip| ip.octets()))?;

                bytes.write_u32::<NetworkEndian>(r.key)?;
                bytes.write_i32::<NetworkEndian>(r.peers_wanted)?;
                bytes.write_u16::<NetworkEndian>(r.port)?;
            }

            Request::Scrape(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                for info_hash in &r.info_hashes {
                    bytes.write_all(&info_hash.0)?;
                }
            }
        }

        Ok(())
    }

    /// Decodes one datagram.
    ///
    /// Anything after the 16-byte header fails as [`RequestParseError::Sendable`]
    /// so the caller can still check the connection id and echo the
    /// transaction id. Scrape hash counts are not capped here.
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RequestParseError> {
        let mut cursor = Cursor::new(bytes);
        let (connection_id, action, transaction_id) = read_header(&mut cursor).map_err(RequestParseError::unsendable_io)?;

        match action {
            ACTION_CONNECT => {
                if connection_id == PROTOCOL_IDENTIFIER {
                    Ok(ConnectRequest {
                        transaction_id: TransactionId(transaction_id),
                    }.into())
                } else {
                    Err(RequestParseError::unsendable_text("protocol identifier missing"))
                }
            }

            ACTION_ANNOUNCE => {
                if bytes.len() < ANNOUNCE_REQUEST_SIZE {
                    return Err(RequestParseError::sendable_text("bad packet", connection_id, transaction_id));
                }

                let mut info_hash = [0; 20];
                let mut peer_id = [0; 20];
                let mut ip = [0; 4];

                let sendable_err = |err: io::Error| {
                    RequestParseError::sendable_io(err, connection_id, transaction_id)
                };

                cursor.read_exact(&mut info_hash).map_err(sendable_err)?;
                cursor.read_exact(&mut peer_id).map_err(sendable_err)?;

                let bytes_downloaded = cursor.read_i64::<NetworkEndian>().map_err(sendable_err)?;
                let bytes_left = cursor.read_i64::<NetworkEndian>().map_err(sendable_err)?;
                let bytes_uploaded = cursor.read_i64::<NetworkEndian>().map_err(sendable_err)?;
                let event = cursor.read_i32::<NetworkEndian>().map_err(sendable_err)?;

                cursor.read_exact(&mut ip).map_err(sendable_err)?;

                let key = cursor.read_u32::<NetworkEndian>().map_err(sendable_err)?;
                let peers_wanted = cursor.read_i32::<NetworkEndian>().map_err(sendable_err)?;
                let port = cursor.read_u16::<NetworkEndian>().map_err(sendable_err)?;

                let ip_address = if ip == [0; 4] {
                    None
                } else {
                    Some(Ipv4Addr::from(ip))
                };

                Ok(AnnounceRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hash: InfoHash(info_hash),
                    peer_id: PeerId(peer_id),
                    bytes_downloaded,
                    bytes_left,
                    bytes_uploaded,
                    event: AnnounceEvent::from_i32(event),
                    ip_address,
                    key,
                    peers_wanted,
                    port,
                }.into())
            }

            ACTION_SCRAPE => {
                let remaining_bytes = &bytes[cursor.position() as usize..];
                let chunks = remaining_bytes.chunks_exact(20);
                if !chunks.remainder().is_empty() {
                    return Err(RequestParseError::sendable_text("bad hash", connection_id, transaction_id));
                }

                let mut info_hashes = Vec::with_capacity(remaining_bytes.len() / 20);
                for chunk in chunks {
                    let hash = InfoHash::from_slice(chunk).ok_or_else(|| {
                        RequestParseError::sendable_text("bad hash", connection_id, transaction_id)
                    })?;
                    info_hashes.push(hash);
                }

                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hashes,
                }.into())
            }

            _ => Err(RequestParseError::sendable_text("bad action", connection_id, transaction_id)),
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Request::Connect(r) => r.transaction_id,
            Request::Announce(r) => r.transaction_id,
            Request::Scrape(r) => r.transaction_id,
        }
    }
}

fn read_header(cursor: &mut Cursor<&[u8]>) -> io::Result<(i64, i32, i32)> {
    let connection_id = cursor.read_i64::<NetworkEndian>()?;
    let action = cursor.read_i32::<NetworkEndian>()?;
    let transaction_id = cursor.read_i32::<NetworkEndian>()?;
    Ok((connection_id, action, transaction_id))
}
