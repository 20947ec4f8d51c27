use crate::pool::structs::object_pool::ObjectPool;
use crate::tracker::structs::peer::Peer;

pub struct Pools {
    /// Compact IPv4 peer lists, capacity `6 * numwant_limit`.
    pub peerlists4: ObjectPool<Vec<u8>>,
    /// Compact IPv6 peer lists, capacity `18 * numwant_limit`.
    pub peerlists6: ObjectPool<Vec<u8>>,
    /// Single compact peer, up to 18 bytes.
    pub baseline_providers: ObjectPool<Vec<u8>>,
    /// Bencode scratch space.
    pub encoders: ObjectPool<Vec<u8>>,
    pub peers: ObjectPool<Box<Peer>>,
    pub(crate) peerlist4_capacity: usize,
    pub(crate) peerlist6_capacity: usize,
}
