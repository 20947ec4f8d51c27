use std::net::IpAddr;
use std::sync::Arc;
use bip_bencode::{ben_bytes, ben_int, ben_map};
use parking_lot::RwLock;
use smallvec::SmallVec;
use crate::backup::enums::backup_error::BackupError;
use crate::pool::structs::pools::Pools;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::baseline_hint::BaselineHint;
use crate::tracker::enums::store_error::StoreError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::memory_peer_store::MemoryPeerStore;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_update::PeerUpdate;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::trim_stats::TrimStats;
use crate::tracker::traits::peer_store::PeerStore;
use crate::tracker::traits::random_source::RandomSource;
use crate::tracker::types::ahash_map::AHashMap;
use crate::tracker::types::swarm_handle::SwarmHandle;

impl MemoryPeerStore {
    pub fn new(pools: Arc<Pools>, stats: Arc<StatsAtomics>, random: Arc<dyn RandomSource>, min_leechers: u32, fast_mode: bool) -> MemoryPeerStore
    {
        MemoryPeerStore {
            swarms: RwLock::new(AHashMap::default()),
            pools,
            stats,
            random,
            min_leechers,
            fast_mode,
        }
    }

    /// Clones the handle out of the map; the map lock is gone when this returns.
    #[inline]
    pub(crate) fn swarm(&self, info_hash: &InfoHash) -> Option<SwarmHandle> {
        self.swarms.read().get(info_hash).cloned()
    }

    #[inline]
    fn swarm_or_create(&self, info_hash: InfoHash) -> SwarmHandle {
        if let Some(handle) = self.swarm(&info_hash) {
            return handle;
        }
        self.swarms.write().entry(info_hash).or_default().clone()
    }

    /// Swaps a retired swarm for a fresh one, unless the sweep already removed
    /// or replaced it.
    fn replace_retired(&self, info_hash: InfoHash, retired: &SwarmHandle) {
        let mut swarms = self.swarms.write();
        if swarms.get(&info_hash).is_some_and(|current| Arc::ptr_eq(current, retired)) {
            swarms.insert(info_hash, SwarmHandle::default());
        }
    }

    /// Handles of every swarm, taken under one short read lock.
    pub(crate) fn handles(&self) -> Vec<(InfoHash, SwarmHandle)> {
        self.swarms.read().iter().map(|(info_hash, handle)| (*info_hash, handle.clone())).collect()
    }

    #[tracing::instrument(level = "debug", skip(self, swarm))]
    fn save_locked(&self, swarm: &mut Swarm, peer_id: PeerId, update: &PeerUpdate) -> bool {
        let existing = swarm.peers.get(&peer_id).map(|peer| (peer.complete, peer.ip));
        match existing {
            Some((was_complete, _)) => swarm.transition(was_complete, update.complete),
            None => swarm.count_new(update.complete),
        }
        if !self.fast_mode {
            self.track_save(existing, update);
        }

        let incomplete = swarm.incomplete;
        let pools = &self.pools;
        let peer = swarm.peers.entry(peer_id).or_insert_with(|| pools.peers.get());

        let is_bad = !update.complete
            && peer.uploaded == update.uploaded
            && peer.downloaded < update.downloaded
            && peer.leechers_last_time >= self.min_leechers;

        Self::apply(peer, update);
        peer.leechers_last_time = incomplete;

        if update.baseline_provider {
            let provider = swarm.baseline_providers.entry(peer_id).or_insert_with(|| pools.peers.get());
            Self::apply(provider, update);
        }

        is_bad
    }

    #[inline]
    fn apply(peer: &mut Peer, update: &PeerUpdate) {
        peer.complete = update.complete;
        peer.ip = update.ip;
        peer.port = update.port;
        peer.last_seen = update.now;
        peer.uploaded = peer.uploaded.max(update.uploaded);
        peer.downloaded = peer.downloaded.max(update.downloaded);
    }

    fn track_save(&self, existing: Option<(bool, IpAddr)>, update: &PeerUpdate) {
        match existing {
            Some((was_complete, old_ip)) => {
                if !was_complete && update.complete {
                    self.stats.update_stats(StatsEvent::Leeches, -1);
                    self.stats.update_stats(StatsEvent::Seeds, 1);
                } else if was_complete && !update.complete {
                    self.stats.update_stats(StatsEvent::Seeds, -1);
                    self.stats.update_stats(StatsEvent::Leeches, 1);
                }
                self.stats.ip_stats.change(old_ip, update.ip);
            }
            None => {
                self.stats.ip_stats.inc(update.ip);
                if update.complete {
                    self.stats.update_stats(StatsEvent::Seeds, 1);
                } else {
                    self.stats.update_stats(StatsEvent::Leeches, 1);
                }
            }
        }
    }

    /// Forgets a peer already unlinked from its swarm and parks it in the pool.
    pub(crate) fn release(&self, peer: Box<Peer>) {
        if !self.fast_mode {
            if peer.complete {
                self.stats.update_stats(StatsEvent::Seeds, -1);
            } else {
                self.stats.update_stats(StatsEvent::Leeches, -1);
            }
            self.stats.ip_stats.remove(peer.ip);
        }
        self.pools.peers.put(peer);
    }

    /// Counts a peer inserted without going through `save`, as a snapshot load does.
    pub(crate) fn track_insert(&self, peer: &Peer) {
        if !self.fast_mode {
            self.track_save(None, &PeerUpdate {
                ip: peer.ip,
                port: peer.port,
                complete: peer.complete,
                uploaded: peer.uploaded,
                downloaded: peer.downloaded,
                now: peer.last_seen,
                baseline_provider: false,
            });
        }
    }

    /// Empties a swarm that left the map, so late writers see it retired.
    pub(crate) fn retire(&self, handle: &SwarmHandle) {
        let mut guard = handle.write();
        let swarm = &mut *guard;
        swarm.retired = true;
        let peers: SmallVec<[PeerId; 16]> = swarm.peers.keys().copied().collect();
        for peer_id in peers {
            if let Some(peer) = swarm.remove_peer(&peer_id) {
                self.release(peer);
            }
        }
        for (_, provider) in swarm.baseline_providers.drain() {
            self.pools.peers.put(provider);
        }
    }

    fn trim_swarm(&self, swarm: &mut Swarm, now: i64, timeout: i64, totals: &mut TrimStats) -> bool {
        let expired: SmallVec<[PeerId; 16]> = swarm.peers.iter()
            .filter(|(_, peer)| peer.is_expired(now, timeout))
            .map(|(peer_id, _)| *peer_id)
            .collect();
        for peer_id in expired {
            if let Some(peer) = swarm.remove_peer(&peer_id) {
                self.release(peer);
                totals.peers += 1;
            }
        }

        let expired: SmallVec<[PeerId; 4]> = swarm.baseline_providers.iter()
            .filter(|(_, provider)| provider.is_expired(now, timeout))
            .map(|(peer_id, _)| *peer_id)
            .collect();
        for peer_id in expired {
            if let Some(provider) = swarm.baseline_providers.remove(&peer_id) {
                self.pools.peers.put(provider);
                totals.baseline_providers += 1;
            }
        }

        if !swarm.peers.is_empty() || swarm.retired {
            return false;
        }
        swarm.retired = true;
        for (_, provider) in swarm.baseline_providers.drain() {
            self.pools.peers.put(provider);
        }
        true
    }
}

impl PeerStore for MemoryPeerStore {
    fn save(&self, info_hash: InfoHash, peer_id: PeerId, update: &PeerUpdate) -> bool {
        loop {
            let handle = self.swarm_or_create(info_hash);
            let mut swarm = handle.write();
            if swarm.retired {
                drop(swarm);
                self.replace_retired(info_hash, &handle);
                continue;
            }
            return self.save_locked(&mut swarm, peer_id, update);
        }
    }

    fn drop_peer(&self, info_hash: &InfoHash, peer_id: &PeerId, baseline_provider: bool) {
        let Some(handle) = self.swarm(info_hash) else {
            return;
        };
        let mut guard = handle.write();
        let swarm = &mut *guard;
        if baseline_provider && let Some(provider) = swarm.baseline_providers.remove(peer_id) {
            self.pools.peers.put(provider);
        }
        if let Some(peer) = swarm.remove_peer(peer_id) {
            self.release(peer);
        }
    }

    fn hash_stats(&self, info_hash: &InfoHash) -> (u32, u32) {
        self.swarm(info_hash)
            .map(|handle| {
                let swarm = handle.read();
                (swarm.complete, swarm.incomplete)
            })
            .unwrap_or((0, 0))
    }

    fn peer_list(&self, info_hash: &InfoHash, numwant: usize, include_peer_id: bool) -> Vec<Vec<u8>> {
        if numwant == 0 {
            return Vec::new();
        }
        let Some(handle) = self.swarm(info_hash) else {
            return Vec::new();
        };
        let selected: SmallVec<[(PeerId, IpAddr, u16); 64]> = {
            let swarm = handle.read();
            swarm.peers.iter()
                .take(numwant)
                .map(|(peer_id, peer)| (*peer_id, peer.ip, peer.port))
                .collect()
        };

        selected.into_iter()
            .map(|(peer_id, ip, port)| encode_verbose_peer(&peer_id, ip, port, include_peer_id))
            .collect()
    }

    fn peer_list_bytes(&self, info_hash: &InfoHash, numwant: usize, ipv4: &mut Vec<u8>, ipv6: &mut Vec<u8>) -> usize {
        ipv4.clear();
        ipv6.clear();
        if numwant == 0 {
            return 0;
        }
        let Some(handle) = self.swarm(info_hash) else {
            return 0;
        };
        let capacity4 = ipv4.capacity();
        let capacity6 = ipv6.capacity();

        let swarm = handle.read();
        let mut written = 0;
        for peer in swarm.peers.values() {
            if written == numwant {
                break;
            }
            let (buffer, capacity) = match peer.ip {
                IpAddr::V4(_) => (&mut *ipv4, capacity4),
                IpAddr::V6(_) => (&mut *ipv6, capacity6),
            };
            if buffer.len() + peer.compact_size() > capacity {
                break;
            }
            peer.write_compact(buffer);
            written += 1;
        }
        written
    }

    fn baseline_provider(&self, info_hash: &InfoHash, compact: bool, include_peer_id: bool) -> Result<BaselineHint, StoreError> {
        let handle = self.swarm(info_hash).ok_or(StoreError::NotFound)?;
        let swarm = handle.read();
        let count = swarm.baseline_providers.len();
        if count == 0 {
            return Err(StoreError::NotFound);
        }
        let index = self.random.below(count as u64) as usize;
        let (peer_id, provider) = swarm.baseline_providers.iter().nth(index).ok_or(StoreError::NotFound)?;
        if !compact {
            return Ok(BaselineHint::Verbose(encode_verbose_peer(peer_id, provider.ip, provider.port, include_peer_id)));
        }
        let mut buffer = self.pools.baseline_providers.get();
        provider.write_compact(&mut buffer);
        Ok(BaselineHint::Compact(buffer))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn trim(&self, now: i64, timeout: i64) -> TrimStats {
        let mut totals = TrimStats::default();
        for (info_hash, handle) in self.handles() {
            let empty = {
                let mut swarm = handle.write();
                self.trim_swarm(&mut swarm, now, timeout, &mut totals)
            };
            if empty {
                let mut swarms = self.swarms.write();
                if swarms.get(&info_hash).is_some_and(|current| Arc::ptr_eq(current, &handle)) {
                    swarms.remove(&info_hash);
                    totals.hashes += 1;
                }
            }
        }
        totals
    }

    fn hashes(&self) -> usize {
        self.swarms.read().len()
    }

    fn peers(&self) -> usize {
        self.handles().iter().map(|(_, handle)| handle.read().peers.len()).sum()
    }

    fn encode_snapshot(&self) -> Result<Vec<u8>, BackupError> {
        self.snapshot()
    }

    fn decode_snapshot(&self, bytes: &[u8]) -> Result<(usize, usize), BackupError> {
        self.restore(bytes)
    }
}

/// Dictionary form of one peer, `peer id` left out when not wanted.
fn encode_verbose_peer(peer_id: &PeerId, ip: IpAddr, port: u16, include_peer_id: bool) -> Vec<u8> {
    if include_peer_id {
        ben_map! {
            "peer id" => ben_bytes!(&peer_id.0[..]),
            "ip" => ben_bytes!(ip.to_string()),
            "port" => ben_int!(port as i64)
        }.encode()
    } else {
        ben_map! {
            "ip" => ben_bytes!(ip.to_string()),
            "port" => ben_int!(port as i64)
        }.encode()
    }
}
