use std::fmt;
use crate::pool::structs::object_pool::ObjectPool;
use crate::pool::structs::pools::Pools;
use crate::tracker::structs::peer::Peer;

pub const COMPACT_IPV4_SIZE: usize = 6;
pub const COMPACT_IPV6_SIZE: usize = 18;

impl Pools {
    pub fn new(numwant_limit: usize) -> Pools {
        let peerlist4_capacity = COMPACT_IPV4_SIZE * numwant_limit;
        let peerlist6_capacity = COMPACT_IPV6_SIZE * numwant_limit;
        Pools {
            peerlists4: Self::buffer_pool(peerlist4_capacity),
            peerlists6: Self::buffer_pool(peerlist6_capacity),
            baseline_providers: Self::buffer_pool(COMPACT_IPV6_SIZE),
            encoders: ObjectPool::with_reset(
                || Vec::with_capacity(512),
                |buffer: &mut Vec<u8>| buffer.clear()
            ),
            peers: ObjectPool::with_reset(
                || Box::new(Peer::default()),
                |peer: &mut Box<Peer>| peer.reset()
            ),
            peerlist4_capacity,
            peerlist6_capacity,
        }
    }

    fn buffer_pool(capacity: usize) -> ObjectPool<Vec<u8>> {
        ObjectPool::with_reset(
            move || Vec::with_capacity(capacity),
            move |buffer: &mut Vec<u8>| {
                buffer.clear();
                buffer.shrink_to(capacity);
                buffer.reserve_exact(capacity);
            }
        )
    }

    /// Byte capacity of one compact IPv4 peer list.
    pub fn peerlist4_capacity(&self) -> usize {
        self.peerlist4_capacity
    }

    /// Byte capacity of one compact IPv6 peer list.
    pub fn peerlist6_capacity(&self) -> usize {
        self.peerlist6_capacity
    }
}

impl fmt::Debug for Pools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pools")
            .field("peerlists4", &self.peerlists4)
            .field("peerlists6", &self.peerlists6)
            .field("baseline_providers", &self.baseline_providers)
            .field("encoders", &self.encoders)
            .field("peers", &self.peers)
            .finish()
    }
}
