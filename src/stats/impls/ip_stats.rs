use std::net::IpAddr;
use crate::stats::structs::ip_stats::IpStats;

impl IpStats {
    /// Counts one more peer record announcing from `ip`.
    pub fn inc(&self, ip: IpAddr) {
        *self.addresses.lock().entry(ip).or_insert(0) += 1;
    }

    /// Forgets one peer record for `ip`, dropping the address at zero.
    pub fn remove(&self, ip: IpAddr) {
        let mut addresses = self.addresses.lock();
        if let Some(count) = addresses.get_mut(&ip) {
            *count -= 1;
            if *count == 0 {
                addresses.remove(&ip);
            }
        }
    }

    /// Moves one peer record from `old` to `new`.
    pub fn change(&self, old: IpAddr, new: IpAddr) {
        if old == new {
            return;
        }
        let mut addresses = self.addresses.lock();
        if let Some(count) = addresses.get_mut(&old) {
            *count -= 1;
            if *count == 0 {
                addresses.remove(&old);
            }
        }
        *addresses.entry(new).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.addresses.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.lock().is_empty()
    }
}
