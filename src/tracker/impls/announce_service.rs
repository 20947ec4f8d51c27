use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use log::debug;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::pool::structs::pools::Pools;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::announce_outcome::AnnounceOutcome;
use crate::tracker::enums::announce_peers::AnnouncePeers;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_result::AnnounceResult;
use crate::tracker::structs::announce_service::AnnounceService;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_update::PeerUpdate;
use crate::tracker::traits::peer_store::PeerStore;
use crate::tracker::traits::random_source::RandomSource;
use crate::tracker::types::ahash_map::AHashSet;

impl AnnounceService {
    pub fn new(store: Arc<dyn PeerStore>, pools: Arc<Pools>, stats: Arc<StatsAtomics>, random: Arc<dyn RandomSource>, config: &TrackerConfig) -> AnnounceService
    {
        AnnounceService {
            store,
            pools,
            stats,
            random,
            announce_interval: config.announce_interval as i64,
            announce_fuzz: config.announce_fuzz,
            numwant_default: config.numwant_default as usize,
            numwant_limit: config.numwant_limit as usize,
            baseline_providers: Arc::new(config.baseline_provider_addrs().into_iter().collect::<AHashSet<SocketAddr>>()),
        }
    }

    /// Registers, refreshes or removes the announcing peer and gathers the reply.
    ///
    /// Validation order: identifiers, then the stopped event (which needs no
    /// port), then port and numwant.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn announce(&self, request: &AnnounceQueryRequest<'_>, now: i64) -> Result<AnnounceOutcome, TrackerError>
    {
        self.stats.update_stats(StatsEvent::Announces, 1);
        let outcome = self.process(request, now);
        if let Err(error) = &outcome {
            self.stats.update_stats(error.stats_event(), 1);
        }
        outcome
    }

    fn process(&self, request: &AnnounceQueryRequest<'_>, now: i64) -> Result<AnnounceOutcome, TrackerError>
    {
        let info_hash = InfoHash::from_slice(request.info_hash).ok_or(TrackerError::client("bad hash"))?;
        let peer_id = PeerId::from_slice(request.peer_id).ok_or(TrackerError::client("bad peerid"))?;
        let ip = request.remote_ip.to_canonical();
        let port = u16::try_from(request.port).ok().filter(|port| *port != 0);
        let baseline_provider = port.is_some_and(|port| self.is_baseline_provider(ip, port));

        if request.event == AnnounceEvent::Stopped {
            self.store.drop_peer(&info_hash, &peer_id, baseline_provider);
            return Ok(AnnounceOutcome::Stopped);
        }

        let port = port.ok_or(TrackerError::client("bad port"))?;
        let numwant = self.resolve_numwant(request.numwant)?;
        let complete = request.event == AnnounceEvent::Completed || request.left == Some(0);

        let bad_actor = self.store.save(info_hash, peer_id, &PeerUpdate {
            ip,
            port,
            complete,
            uploaded: request.uploaded,
            downloaded: request.downloaded,
            now,
            baseline_provider,
        });
        if bad_actor {
            self.stats.update_stats(StatsEvent::BadActors, 1);
            debug!("[ANNOUNCE] Peer {peer_id} on {info_hash} matches the bad actor heuristic");
        }

        let (seeds, leeches) = self.store.hash_stats(&info_hash);
        let peers = if request.compact {
            let mut ipv4 = self.pools.peerlists4.get();
            let mut ipv6 = self.pools.peerlists6.get();
            self.store.peer_list_bytes(&info_hash, numwant, &mut ipv4, &mut ipv6);
            AnnouncePeers::Compact { ipv4, ipv6 }
        } else {
            AnnouncePeers::Verbose(self.store.peer_list(&info_hash, numwant, !request.no_peer_id))
        };

        // a provider that is still leeching gets a hint like any other client
        let baseline_hint = if !baseline_provider || !complete {
            self.store.baseline_provider(&info_hash, request.compact, !request.no_peer_id).ok()
        } else {
            None
        };

        Ok(AnnounceOutcome::Announced(AnnounceResult {
            interval: self.interval(),
            complete: seeds,
            incomplete: leeches,
            peers,
            baseline_hint,
            bad_actor,
        }))
    }

    /// Unspecified selects the default, larger values are clamped to the limit.
    pub fn resolve_numwant(&self, numwant: Option<i64>) -> Result<usize, TrackerError> {
        match numwant {
            None => Ok(self.numwant_default),
            Some(value) if value < 0 => Err(TrackerError::client("bad numwant")),
            Some(value) => Ok((value as u64).min(self.numwant_limit as u64) as usize),
        }
    }

    /// Base interval plus a uniform fuzz in `[0, announce_fuzz)`.
    pub fn interval(&self) -> i64 {
        if self.announce_fuzz == 0 {
            return self.announce_interval;
        }
        self.announce_interval + self.random.below(self.announce_fuzz) as i64
    }

    pub fn is_baseline_provider(&self, ip: IpAddr, port: u16) -> bool {
        !self.baseline_providers.is_empty() && self.baseline_providers.contains(&SocketAddr::new(ip, port))
    }
}
