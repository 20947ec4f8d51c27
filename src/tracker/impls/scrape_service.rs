use std::sync::Arc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_entry::ScrapeEntry;
use crate::tracker::structs::scrape_service::ScrapeService;
use crate::tracker::traits::peer_store::PeerStore;

/// Largest hash count a scrape may ask for, the most a UDP reply can carry.
pub const MAX_SCRAPE_HASHES: usize = 74;

impl ScrapeService {
    pub fn new(store: Arc<dyn PeerStore>, stats: Arc<StatsAtomics>) -> ScrapeService {
        ScrapeService { store, stats }
    }

    /// One entry per requested hash, in request order.
    #[tracing::instrument(level = "debug", skip(self, hashes))]
    pub fn scrape<H: AsRef<[u8]>>(&self, hashes: &[H]) -> Result<Vec<ScrapeEntry>, TrackerError>
    {
        self.stats.update_stats(StatsEvent::Scrapes, 1);
        let entries = self.process(hashes);
        if let Err(error) = &entries {
            self.stats.update_stats(error.stats_event(), 1);
        }
        entries
    }

    fn process<H: AsRef<[u8]>>(&self, hashes: &[H]) -> Result<Vec<ScrapeEntry>, TrackerError>
    {
        if hashes.len() > MAX_SCRAPE_HASHES {
            return Err(TrackerError::client("74 hashes max"));
        }
        hashes.iter().map(|hash| {
            let info_hash = InfoHash::from_slice(hash.as_ref()).ok_or(TrackerError::client("bad hash"))?;
            let (complete, incomplete) = self.store.hash_stats(&info_hash);
            Ok(ScrapeEntry {
                complete,
                incomplete,
                downloaded: -1,
            })
        }).collect()
    }
}
