use crate::pool::structs::pools::Pools;
use crate::tracker::enums::announce_peers::AnnouncePeers;
use crate::tracker::enums::baseline_hint::BaselineHint;
use crate::tracker::structs::announce_result::AnnounceResult;

impl AnnounceResult {
    /// Hands pooled buffers back once the reply has been encoded.
    pub fn recycle(self, pools: &Pools) {
        if let AnnouncePeers::Compact { ipv4, ipv6 } = self.peers {
            pools.peerlists4.put(ipv4);
            pools.peerlists6.put(ipv6);
        }
        if let Some(BaselineHint::Compact(hint)) = self.baseline_hint {
            pools.baseline_providers.put(hint);
        }
    }

    /// Keeps the compact list of one address family and recycles everything else.
    pub fn into_compact(self, pools: &Pools, ipv4: bool) -> Vec<u8> {
        if let Some(BaselineHint::Compact(hint)) = self.baseline_hint {
            pools.baseline_providers.put(hint);
        }
        match self.peers {
            AnnouncePeers::Compact { ipv4: peers4, ipv6: peers6 } => {
                if ipv4 {
                    pools.peerlists6.put(peers6);
                    peers4
                } else {
                    pools.peerlists4.put(peers4);
                    peers6
                }
            }
            AnnouncePeers::Verbose(_) => Vec::new(),
        }
    }

    /// Number of peers listed, whatever the form.
    pub fn peer_count(&self) -> usize {
        match &self.peers {
            AnnouncePeers::Compact { ipv4, ipv6 } => ipv4.len() / 6 + ipv6.len() / 18,
            AnnouncePeers::Verbose(entries) => entries.len(),
        }
    }
}
