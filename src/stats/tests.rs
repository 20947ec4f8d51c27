#[cfg(test)]
mod stats_tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_update_stats_adds_and_subtracts() {
        let stats = StatsAtomics::new(1_700_000_000);
        stats.update_stats(StatsEvent::Seeds, 3);
        stats.update_stats(StatsEvent::Seeds, -1);
        stats.update_stats(StatsEvent::Announces, 1);
        let snapshot = stats.get_stats();
        assert_eq!(snapshot.started, 1_700_000_000);
        assert_eq!(snapshot.seeds, 2);
        assert_eq!(snapshot.announces, 1);
        assert_eq!(snapshot.leeches, 0);
    }

    #[test]
    fn test_ip_stats_reference_counts() {
        let stats = StatsAtomics::default();
        let a = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let b = IpAddr::V6(Ipv6Addr::LOCALHOST);
        stats.ip_stats.inc(a);
        stats.ip_stats.inc(a);
        stats.ip_stats.inc(b);
        assert_eq!(stats.get_stats().unique_ips, 2);
        stats.ip_stats.remove(a);
        assert_eq!(stats.ip_stats.len(), 2);
        stats.ip_stats.remove(a);
        assert_eq!(stats.ip_stats.len(), 1);
        stats.ip_stats.change(b, a);
        assert_eq!(stats.ip_stats.len(), 1);
        stats.ip_stats.remove(a);
        assert!(stats.ip_stats.is_empty());
    }

    #[test]
    fn test_ip_stats_remove_unknown_is_noop() {
        let stats = StatsAtomics::default();
        stats.ip_stats.remove(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(stats.ip_stats.is_empty());
    }
}
