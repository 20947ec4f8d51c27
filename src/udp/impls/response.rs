use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::pool::structs::pools::Pools;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_ERROR, ACTION_SCRAPE};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeResponse> for Response {
    fn from(r: ScrapeResponse) -> Self {
        Self::Scrape(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    pub fn error(transaction_id: TransactionId, message: impl Into<std::borrow::Cow<'static, str>>) -> Response {
        Response::Error(ErrorResponse {
            transaction_id,
            message: message.into(),
        })
    }

    #[tracing::instrument(skip(bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::AnnounceIpv4(r) | Response::AnnounceIpv6(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_ANNOUNCE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_i32::<NetworkEndian>(r.announce_interval)?;
                bytes.write_i32::<NetworkEndian>(r.leechers)?;
                bytes.write_i32::<NetworkEndian>(r.seeders)?;
                bytes.write_all(&r.peers)?;
            }
            Response::Scrape(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                for torrent_stat in &r.torrent_stats {
                    bytes.write_i32::<NetworkEndian>(torrent_stat.seeders)?;
                    bytes.write_i32::<NetworkEndian>(torrent_stat.completed)?;
                    bytes.write_i32::<NetworkEndian>(torrent_stat.leechers)?;
                }
            }
            Response::Error(r) => {
                bytes.write_i32::<NetworkEndian>(ACTION_ERROR)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    /// Client side decoding; `ipv4` picks the peer entry size of announce replies.
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn from_bytes(bytes: &[u8], ipv4: bool) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);

        let action = cursor.read_i32::<NetworkEndian>()?;
        let transaction_id = TransactionId(cursor.read_i32::<NetworkEndian>()?);

        match action {
            ACTION_CONNECT => {
                let connection_id = cursor.read_i64::<NetworkEndian>()?;
                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                }.into())
            }
            ACTION_ANNOUNCE => {
                let announce_interval = cursor.read_i32::<NetworkEndian>()?;
                let leechers = cursor.read_i32::<NetworkEndian>()?;
                let seeders = cursor.read_i32::<NetworkEndian>()?;

                let peers = &bytes[cursor.position() as usize..];
                let entry_size = if ipv4 { 6 } else { 18 };
                if peers.len() % entry_size != 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "truncated peer entry"));
                }
                let response = AnnounceResponse {
                    transaction_id,
                    announce_interval,
                    leechers,
                    seeders,
                    peers: peers.to_vec(),
                };
                Ok(if ipv4 { Response::AnnounceIpv4(response) } else { Response::AnnounceIpv6(response) })
            }
            ACTION_SCRAPE => {
                let remaining = &bytes[cursor.position() as usize..];
                if remaining.len() % 12 != 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "truncated scrape entry"));
                }
                let mut torrent_stats = Vec::with_capacity(remaining.len() / 12);
                for _ in 0..remaining.len() / 12 {
                    torrent_stats.push(TorrentScrapeStatistics {
                        seeders: cursor.read_i32::<NetworkEndian>()?,
                        completed: cursor.read_i32::<NetworkEndian>()?,
                        leechers: cursor.read_i32::<NetworkEndian>()?,
                    });
                }
                Ok(ScrapeResponse {
                    transaction_id,
                    torrent_stats,
                }.into())
            }
            ACTION_ERROR => {
                let message = String::from_utf8_lossy(&bytes[cursor.position() as usize..]).into_owned();
                Ok(Response::error(transaction_id, message))
            }
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "unknown action")),
        }
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => 16,
            Response::AnnounceIpv4(r) | Response::AnnounceIpv6(r) => 20 + r.peers.len(),
            Response::Scrape(r) => 8 + (r.torrent_stats.len() * 12),
            Response::Error(r) => 8 + r.message.len(),
        }
    }

    /// Returns a pooled peer buffer once the reply has been written.
    pub fn recycle(self, pools: &Pools) {
        match self {
            Response::AnnounceIpv4(r) => pools.peerlists4.put(r.peers),
            Response::AnnounceIpv6(r) => pools.peerlists6.put(r.peers),
            _ => {}
        }
    }
}
