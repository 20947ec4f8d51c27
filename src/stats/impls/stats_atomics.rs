use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new(started: i64) -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(started, Ordering::Relaxed);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::Relaxed),
            connects: self.connects.load(Ordering::Relaxed),
            announces: self.announces.load(Ordering::Relaxed),
            scrapes: self.scrapes.load(Ordering::Relaxed),
            client_errors: self.client_errors.load(Ordering::Relaxed),
            server_errors: self.server_errors.load(Ordering::Relaxed),
            seeds: self.seeds.load(Ordering::Relaxed),
            leeches: self.leeches.load(Ordering::Relaxed),
            bad_actors: self.bad_actors.load(Ordering::Relaxed),
            expired_peers: self.expired_peers.load(Ordering::Relaxed),
            expired_hashes: self.expired_hashes.load(Ordering::Relaxed),
            udp_queue_drops: self.udp_queue_drops.load(Ordering::Relaxed),
            unique_ips: self.ip_stats.len() as i64,
        }
    }

    #[inline]
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = match event {
            StatsEvent::Connects => &self.connects,
            StatsEvent::Announces => &self.announces,
            StatsEvent::Scrapes => &self.scrapes,
            StatsEvent::ClientErrors => &self.client_errors,
            StatsEvent::ServerErrors => &self.server_errors,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Leeches => &self.leeches,
            StatsEvent::BadActors => &self.bad_actors,
            StatsEvent::ExpiredPeers => &self.expired_peers,
            StatsEvent::ExpiredHashes => &self.expired_hashes,
            StatsEvent::UdpQueueDrops => &self.udp_queue_drops,
        };
        counter.fetch_add(value, Ordering::Relaxed);
    }
}
