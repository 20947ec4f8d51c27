use std::net::{IpAddr, Ipv4Addr};
use crate::tracker::structs::peer::Peer;

impl Default for Peer {
    fn default() -> Self {
        Peer {
            ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 0,
            complete: false,
            last_seen: 0,
            uploaded: 0,
            downloaded: 0,
            leechers_last_time: 0,
        }
    }
}

impl Peer {
    pub fn reset(&mut self) {
        *self = Peer::default();
    }

    /// Bytes this peer takes in a compact list: 6 for IPv4, 18 for IPv6.
    #[inline]
    pub fn compact_size(&self) -> usize {
        match self.ip {
            IpAddr::V4(_) => 6,
            IpAddr::V6(_) => 18,
        }
    }

    /// Appends the address octets followed by the big-endian port.
    #[inline]
    pub fn write_compact(&self, out: &mut Vec<u8>) {
        match self.ip {
            IpAddr::V4(ip) => out.extend_from_slice(&ip.octets()),
            IpAddr::V6(ip) => out.extend_from_slice(&ip.octets()),
        }
        out.extend_from_slice(&self.port.to_be_bytes());
    }

    /// `now - last_seen > timeout`, the only condition under which a peer expires.
    #[inline]
    pub fn is_expired(&self, now: i64, timeout: i64) -> bool {
        now - self.last_seen > timeout
    }
}
