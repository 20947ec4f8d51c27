use std::net::IpAddr;
use parking_lot::Mutex;
use crate::tracker::types::ahash_map::AHashMap;

#[derive(Debug, Default)]
pub struct IpStats {
    pub(crate) addresses: Mutex<AHashMap<IpAddr, u32>>,
}
