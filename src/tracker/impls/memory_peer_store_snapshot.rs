use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::backup::enums::backup_error::BackupError;
use crate::tracker::structs::memory_peer_store::MemoryPeerStore;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_snapshot::PeerSnapshot;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_snapshot::SwarmSnapshot;

impl PeerSnapshot {
    pub fn from_peer(peer_id: PeerId, peer: &Peer) -> PeerSnapshot {
        PeerSnapshot {
            peer_id,
            ip: peer.ip,
            port: peer.port,
            complete: peer.complete,
            last_seen: peer.last_seen,
            uploaded: peer.uploaded,
            downloaded: peer.downloaded,
        }
    }

    pub fn fill(&self, peer: &mut Peer) {
        peer.ip = self.ip;
        peer.port = self.port;
        peer.complete = self.complete;
        peer.last_seen = self.last_seen;
        peer.uploaded = self.uploaded;
        peer.downloaded = self.downloaded;
        peer.leechers_last_time = 0;
    }
}

impl MemoryPeerStore {
    /// MessagePack of every live swarm, lz4 compressed with the size prepended.
    pub(crate) fn snapshot(&self) -> Result<Vec<u8>, BackupError> {
        let handles = self.handles();
        let mut snapshot = Vec::with_capacity(handles.len());
        for (info_hash, handle) in handles {
            let swarm = handle.read();
            if swarm.retired || swarm.peers.is_empty() {
                continue;
            }
            snapshot.push(SwarmSnapshot {
                info_hash,
                peers: swarm.peers.iter().map(|(peer_id, peer)| PeerSnapshot::from_peer(*peer_id, peer)).collect(),
                baseline_providers: swarm.baseline_providers.iter().map(|(peer_id, peer)| PeerSnapshot::from_peer(*peer_id, peer)).collect(),
            });
        }
        let encoded = rmp_serde::to_vec(&snapshot)?;
        Ok(lz4_flex::compress_prepend_size(&encoded))
    }

    /// Rebuilds swarms from a snapshot. Counters are derived from the peers,
    /// and a swarm already present under the same hash is replaced.
    ///
    /// Meant to run before any traffic is served.
    pub(crate) fn restore(&self, bytes: &[u8]) -> Result<(usize, usize), BackupError> {
        let decompressed = lz4_flex::decompress_size_prepended(bytes)
            .map_err(|e| BackupError::Compression(e.to_string()))?;
        let snapshot: Vec<SwarmSnapshot> = rmp_serde::from_slice(&decompressed)?;

        let mut peers = 0;
        let mut hashes = 0;
        for entry in snapshot {
            let mut swarm = Swarm::default();
            for record in &entry.peers {
                if swarm.peers.contains_key(&record.peer_id) {
                    continue;
                }
                let mut peer = self.pools.peers.get();
                record.fill(&mut peer);
                swarm.count_new(peer.complete);
                self.track_insert(&peer);
                swarm.peers.insert(record.peer_id, peer);
            }
            if swarm.peers.is_empty() {
                continue;
            }
            for record in &entry.baseline_providers {
                let mut provider = self.pools.peers.get();
                record.fill(&mut provider);
                if let Some(previous) = swarm.baseline_providers.insert(record.peer_id, provider) {
                    self.pools.peers.put(previous);
                }
            }

            peers += swarm.peers.len();
            hashes += 1;
            let replaced = self.swarms.write().insert(entry.info_hash, Arc::new(RwLock::new(swarm)));
            if let Some(replaced) = replaced {
                debug!("[BACKUP] Replacing live swarm {}", entry.info_hash);
                self.retire(&replaced);
            }
        }
        Ok((peers, hashes))
    }
}
