use std::fmt;
use std::net::{IpAddr, SocketAddr};
use rand::RngExt;
use sha1::{Digest, Sha1};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::connection_id_manager::ConnectionIdManager;

impl ConnectionIdManager {
    /// Fresh random secret; ids do not survive a restart.
    pub fn new(lifetime: u64) -> ConnectionIdManager {
        Self::with_secret(rand::rng().random::<[u8; 32]>(), lifetime)
    }

    pub fn with_secret(secret: [u8; 32], lifetime: u64) -> ConnectionIdManager {
        ConnectionIdManager {
            secret,
            lifetime: lifetime.max(1),
        }
    }

    #[inline]
    pub fn issue(&self, remote: &SocketAddr, now: i64) -> ConnectionId {
        self.derive(remote, self.bucket(now))
    }

    /// Accepts ids issued to `remote` in the current or the previous bucket.
    #[inline]
    pub fn verify(&self, connection_id: ConnectionId, remote: &SocketAddr, now: i64) -> bool {
        let bucket = self.bucket(now);
        connection_id == self.derive(remote, bucket)
            || (bucket > 0 && connection_id == self.derive(remote, bucket - 1))
    }

    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    #[inline]
    fn bucket(&self, now: i64) -> u64 {
        now.max(0) as u64 / self.lifetime
    }

    fn derive(&self, remote: &SocketAddr, bucket: u64) -> ConnectionId {
        let mut hasher = Sha1::new();
        hasher.update(self.secret);
        hasher.update(bucket.to_be_bytes());
        match remote.ip().to_canonical() {
            IpAddr::V4(ip) => hasher.update(ip.octets()),
            IpAddr::V6(ip) => hasher.update(ip.octets()),
        }
        hasher.update(remote.port().to_be_bytes());
        let digest = hasher.finalize();

        let mut id = [0u8; 8];
        id.copy_from_slice(&digest[..8]);
        ConnectionId(i64::from_be_bytes(id))
    }
}

impl fmt::Debug for ConnectionIdManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionIdManager")
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
