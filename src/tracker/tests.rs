#[cfg(test)]
mod tracker_tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::sync::Arc;
    use crate::pool::structs::pools::Pools;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::enums::baseline_hint::BaselineHint;
    use crate::tracker::enums::store_error::StoreError;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::memory_peer_store::MemoryPeerStore;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::peer_update::PeerUpdate;
    use crate::tracker::structs::sequence_random::SequenceRandom;
    use crate::tracker::traits::peer_store::PeerStore;

    const NOW: i64 = 1_700_000_000;

    fn store(min_leechers: u32, numwant_limit: usize, picks: Vec<u64>) -> (MemoryPeerStore, Arc<StatsAtomics>) {
        let stats = Arc::new(StatsAtomics::new(NOW));
        let store = MemoryPeerStore::new(
            Arc::new(Pools::new(numwant_limit)),
            Arc::clone(&stats),
            Arc::new(SequenceRandom::new(picks)),
            min_leechers,
            false,
        );
        (store, stats)
    }

    fn hash(n: u8) -> InfoHash {
        InfoHash([n; 20])
    }

    fn peer(n: u8) -> PeerId {
        PeerId([n; 20])
    }

    fn update(last_octet: u8, complete: bool, uploaded: u64, downloaded: u64, now: i64) -> PeerUpdate {
        PeerUpdate {
            ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet)),
            port: 6881,
            complete,
            uploaded,
            downloaded,
            now,
            baseline_provider: false,
        }
    }

    #[test]
    fn test_counters_follow_saves_transitions_and_drops() {
        let (store, stats) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        store.save(hash(1), peer(2), &update(2, false, 0, 0, NOW));
        store.save(hash(1), peer(3), &update(3, true, 0, 0, NOW));
        assert_eq!(store.hash_stats(&hash(1)), (1, 2));

        store.save(hash(1), peer(1), &update(1, true, 0, 0, NOW));
        assert_eq!(store.hash_stats(&hash(1)), (2, 1));

        store.save(hash(1), peer(3), &update(3, false, 0, 0, NOW));
        assert_eq!(store.hash_stats(&hash(1)), (1, 2));

        store.drop_peer(&hash(1), &peer(2), false);
        assert_eq!(store.hash_stats(&hash(1)), (1, 1));
        assert_eq!(store.peers(), 2);

        let snapshot = stats.get_stats();
        assert_eq!(snapshot.seeds, 1);
        assert_eq!(snapshot.leeches, 1);
        assert_eq!(snapshot.unique_ips, 2);
    }

    #[test]
    fn test_unknown_hash_reads_as_empty() {
        let (store, _) = store(2, 50, vec![0]);
        assert_eq!(store.hash_stats(&hash(9)), (0, 0));
        assert!(store.peer_list(&hash(9), 10, true).is_empty());
        let mut ipv4 = Vec::with_capacity(60);
        let mut ipv6 = Vec::with_capacity(180);
        assert_eq!(store.peer_list_bytes(&hash(9), 10, &mut ipv4, &mut ipv6), 0);
        assert_eq!(store.hashes(), 0);
    }

    #[test]
    fn test_transfer_totals_never_decrease() {
        let (store, _) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 500, 900, NOW));
        store.save(hash(1), peer(1), &update(1, false, 100, 200, NOW + 10));

        let handle = store.swarm(&hash(1)).unwrap();
        let swarm = handle.read();
        let record = swarm.peers.get(&peer(1)).unwrap();
        assert_eq!(record.uploaded, 500);
        assert_eq!(record.downloaded, 900);
        assert_eq!(record.last_seen, NOW + 10);
    }

    #[test]
    fn test_bad_actor_needs_enough_leechers_last_time() {
        let (store, _) = store(2, 50, vec![0]);
        assert!(!store.save(hash(1), peer(1), &update(1, false, 0, 100, NOW)));
        assert!(!store.save(hash(1), peer(2), &update(2, false, 0, 100, NOW)));
        // last update saw a single leecher
        assert!(!store.save(hash(1), peer(1), &update(1, false, 0, 200, NOW)));
        // now the previous update saw two
        assert!(store.save(hash(1), peer(1), &update(1, false, 0, 300, NOW)));
        // uploading clears the flag
        assert!(!store.save(hash(1), peer(1), &update(1, false, 10, 400, NOW)));
        // seeds are never flagged
        assert!(!store.save(hash(1), peer(1), &update(1, true, 10, 500, NOW)));
    }

    #[test]
    fn test_drop_absent_peer_is_noop() {
        let (store, stats) = store(2, 50, vec![0]);
        store.drop_peer(&hash(1), &peer(1), false);
        assert_eq!(store.hashes(), 0);

        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        store.drop_peer(&hash(1), &peer(2), true);
        assert_eq!(store.hash_stats(&hash(1)), (0, 1));
        assert_eq!(stats.get_stats().leeches, 1);
    }

    #[test]
    fn test_peer_list_bytes_respects_numwant_and_capacity() {
        let (store, _) = store(2, 50, vec![0]);
        for n in 1..=5 {
            store.save(hash(1), peer(n), &update(n, false, 0, 0, NOW));
        }

        let mut ipv4 = Vec::with_capacity(6 * 50);
        let mut ipv6 = Vec::with_capacity(18 * 50);
        assert_eq!(store.peer_list_bytes(&hash(1), 3, &mut ipv4, &mut ipv6), 3);
        assert_eq!(ipv4.len(), 18);
        assert!(ipv6.is_empty());

        let mut small = Vec::with_capacity(12);
        assert_eq!(store.peer_list_bytes(&hash(1), 10, &mut small, &mut ipv6), 2);
        assert_eq!(small.len(), 12);

        assert_eq!(store.peer_list_bytes(&hash(1), 0, &mut ipv4, &mut ipv6), 0);
        assert!(ipv4.is_empty());
    }

    #[test]
    fn test_peer_list_bytes_splits_families() {
        let (store, _) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        store.save(hash(1), peer(2), &PeerUpdate {
            ip: IpAddr::V6(Ipv6Addr::LOCALHOST),
            ..update(2, false, 0, 0, NOW)
        });

        let mut ipv4 = Vec::with_capacity(60);
        let mut ipv6 = Vec::with_capacity(180);
        assert_eq!(store.peer_list_bytes(&hash(1), 10, &mut ipv4, &mut ipv6), 2);
        assert_eq!(ipv4, vec![10, 0, 0, 1, 0x1a, 0xe1]);
        assert_eq!(ipv6.len(), 18);
        assert_eq!(&ipv6[16..], &[0x1a, 0xe1]);
    }

    #[test]
    fn test_peer_list_dictionaries() {
        let (store, _) = store(2, 50, vec![0]);
        store.save(hash(1), peer(b'a'), &update(1, false, 0, 0, NOW));

        let with_id = store.peer_list(&hash(1), 10, true);
        assert_eq!(with_id.len(), 1);
        let expected = [
            b"d2:ip8:10.0.0.17:peer id20:".as_slice(),
            &[b'a'; 20],
            b"4:porti6881ee",
        ].concat();
        assert_eq!(with_id[0], expected);

        let without_id = store.peer_list(&hash(1), 10, false);
        assert_eq!(without_id[0], b"d2:ip8:10.0.0.14:porti6881ee".to_vec());
        assert!(store.peer_list(&hash(1), 0, true).is_empty());
    }

    #[test]
    fn test_baseline_provider_pick() {
        let (store, _) = store(2, 50, vec![0]);
        assert_eq!(store.baseline_provider(&hash(1), true, true), Err(StoreError::NotFound));

        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        assert_eq!(store.baseline_provider(&hash(1), true, true), Err(StoreError::NotFound));

        store.save(hash(1), peer(2), &PeerUpdate { baseline_provider: true, ..update(2, true, 0, 0, NOW) });
        assert_eq!(store.baseline_provider(&hash(1), true, true), Ok(BaselineHint::Compact(vec![10, 0, 0, 2, 0x1a, 0xe1])));
        // providers are peers too, but the counters only see them once
        assert_eq!(store.hash_stats(&hash(1)), (1, 1));

        store.drop_peer(&hash(1), &peer(2), true);
        assert_eq!(store.baseline_provider(&hash(1), true, true), Err(StoreError::NotFound));
    }

    #[test]
    fn test_baseline_provider_dictionary_form() {
        let (store, stats) = store(2, 50, vec![0]);
        store.save(hash(1), peer(2), &PeerUpdate { baseline_provider: true, ..update(2, true, 0, 0, NOW) });

        let with_id = [
            b"d2:ip8:10.0.0.27:peer id20:".as_slice(),
            &[2u8; 20],
            b"4:porti6881ee",
        ].concat();
        assert_eq!(store.baseline_provider(&hash(1), false, true), Ok(BaselineHint::Verbose(with_id)));
        assert_eq!(
            store.baseline_provider(&hash(1), false, false),
            Ok(BaselineHint::Verbose(b"d2:ip8:10.0.0.24:porti6881ee".to_vec()))
        );
        assert_eq!(store.baseline_provider(&hash(2), false, true), Err(StoreError::NotFound));
        assert_eq!(stats.get_stats().seeds, 1);
    }

    #[test]
    fn test_trim_boundary_is_exclusive() {
        let (store, _) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        store.save(hash(1), peer(2), &PeerUpdate { baseline_provider: true, ..update(2, true, 0, 0, NOW) });

        let totals = store.trim(NOW + 100, 100);
        assert_eq!(totals.peers, 0);
        assert_eq!(store.peers(), 2);

        let totals = store.trim(NOW + 101, 100);
        assert_eq!(totals.peers, 2);
        assert_eq!(totals.baseline_providers, 1);
        assert_eq!(totals.hashes, 1);
        assert_eq!(store.hashes(), 0);
    }

    #[test]
    fn test_save_after_trim_recreates_swarm() {
        let (store, stats) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        let stale = store.swarm(&hash(1)).unwrap();
        store.trim(NOW + 1000, 100);
        assert!(stale.read().is_retired());

        store.save(hash(1), peer(1), &update(1, true, 0, 0, NOW + 1000));
        assert_eq!(store.hash_stats(&hash(1)), (1, 0));
        assert!(!Arc::ptr_eq(&stale, &store.swarm(&hash(1)).unwrap()));
        assert_eq!(stats.get_stats().seeds, 1);
        assert_eq!(stats.get_stats().leeches, 0);
    }

    #[test]
    fn test_save_replaces_a_retired_swarm_still_in_the_map() {
        let (store, _) = store(2, 50, vec![0]);
        store.save(hash(1), peer(1), &update(1, false, 0, 0, NOW));
        let handle = store.swarm(&hash(1)).unwrap();
        store.retire(&handle);

        store.save(hash(1), peer(2), &update(2, false, 0, 0, NOW));
        assert_eq!(store.hash_stats(&hash(1)), (0, 1));
        assert_eq!(store.hashes(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (source, _) = store(2, 50, vec![0]);
        source.save(hash(1), peer(1), &update(1, false, 5, 10, NOW));
        source.save(hash(1), peer(2), &PeerUpdate { baseline_provider: true, ..update(2, true, 0, 0, NOW) });
        source.save(hash(2), peer(3), &update(3, true, 0, 0, NOW));
        let bytes = source.encode_snapshot().unwrap();

        let (target, stats) = store(2, 50, vec![0]);
        assert_eq!(target.decode_snapshot(&bytes).unwrap(), (3, 2));
        assert_eq!(target.hash_stats(&hash(1)), (1, 1));
        assert_eq!(target.hash_stats(&hash(2)), (1, 0));
        assert_eq!(target.baseline_provider(&hash(1), true, true), Ok(BaselineHint::Compact(vec![10, 0, 0, 2, 0x1a, 0xe1])));
        assert_eq!(stats.get_stats().seeds, 2);
        assert_eq!(stats.get_stats().leeches, 1);

        let handle = target.swarm(&hash(1)).unwrap();
        assert_eq!(handle.read().peers.get(&peer(1)).unwrap().downloaded, 10);
    }

    #[test]
    fn test_server_error_hides_detail() {
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::tracker::enums::tracker_error::TrackerError;

        let error = TrackerError::server(format!("could not encode {}", 42));
        assert!(!error.is_client_error());
        assert_eq!(error.public_message(), "internal err");
        assert_eq!(error.stats_event(), StatsEvent::ServerErrors);
        assert_eq!(error.to_string(), "could not encode 42");

        let client = TrackerError::client("bad port");
        assert_eq!(client.public_message(), "bad port");
        assert_eq!(client.stats_event(), StatsEvent::ClientErrors);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let (store, _) = store(2, 50, vec![0]);
        assert!(store.decode_snapshot(b"definitely not a snapshot").is_err());
        assert_eq!(store.hashes(), 0);
    }

    mod announce_service_tests {
        use std::net::{IpAddr, Ipv4Addr};
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::enums::announce_outcome::AnnounceOutcome;
        use crate::tracker::enums::announce_peers::AnnouncePeers;
        use crate::tracker::enums::baseline_hint::BaselineHint;
        use crate::tracker::enums::tracker_error::TrackerError;
        use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
        use crate::tracker::structs::announce_result::AnnounceResult;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::sequence_random::SequenceRandom;
        use crate::tracker::structs::tracker_context::TrackerContext;

        const NOW: i64 = 1_700_000_000;
        const HASH: [u8; 20] = [7; 20];

        fn context(providers: Vec<String>, picks: Vec<u64>) -> TrackerContext {
            let mut config = Configuration::init();
            config.tracker_config.baseline_providers = providers;
            TrackerContext::with_random(Arc::new(config), Arc::new(SequenceRandom::new(picks)))
        }

        fn request<'a>(peer_id: &'a [u8], last_octet: u8) -> AnnounceQueryRequest<'a> {
            AnnounceQueryRequest {
                info_hash: &HASH,
                peer_id,
                port: 6881,
                event: AnnounceEvent::Started,
                numwant: None,
                uploaded: 0,
                downloaded: 0,
                left: Some(1000),
                compact: true,
                no_peer_id: false,
                remote_ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet)),
            }
        }

        fn announced(outcome: Result<AnnounceOutcome, TrackerError>) -> AnnounceResult {
            match outcome {
                Ok(AnnounceOutcome::Announced(result)) => result,
                other => panic!("expected an announce result, got {other:?}"),
            }
        }

        #[test]
        fn test_announce_lists_peers_and_fuzzes_interval() {
            let ctx = context(vec![], vec![7]);
            let first = announced(ctx.announce.announce(&request(&[1; 20], 1), NOW));
            assert_eq!(first.interval, 1807);
            assert_eq!((first.complete, first.incomplete), (0, 1));

            let second = announced(ctx.announce.announce(&AnnounceQueryRequest { left: Some(0), ..request(&[2; 20], 2) }, NOW));
            assert_eq!((second.complete, second.incomplete), (1, 1));
            assert_eq!(second.peer_count(), 2);
            assert!(second.baseline_hint.is_none());
            match &second.peers {
                AnnouncePeers::Compact { ipv4, ipv6 } => {
                    assert_eq!(ipv4.len(), 12);
                    assert!(ipv6.is_empty());
                }
                AnnouncePeers::Verbose(_) => panic!("expected compact peers"),
            }
            second.recycle(&ctx.pools);
            assert_eq!(ctx.stats.get_stats().announces, 2);
        }

        #[test]
        fn test_completed_event_marks_seed() {
            let ctx = context(vec![], vec![0]);
            let result = announced(ctx.announce.announce(&AnnounceQueryRequest {
                event: AnnounceEvent::Completed,
                ..request(&[1; 20], 1)
            }, NOW));
            assert_eq!((result.complete, result.incomplete), (1, 0));
        }

        #[test]
        fn test_verbose_announce() {
            let ctx = context(vec![], vec![0]);
            let result = announced(ctx.announce.announce(&AnnounceQueryRequest { compact: false, ..request(&[1; 20], 1) }, NOW));
            match result.peers {
                AnnouncePeers::Verbose(entries) => assert_eq!(entries.len(), 1),
                AnnouncePeers::Compact { .. } => panic!("expected dictionaries"),
            }
        }

        #[test]
        fn test_stopped_creates_no_swarm() {
            let ctx = context(vec![], vec![0]);
            let outcome = ctx.announce.announce(&AnnounceQueryRequest {
                event: AnnounceEvent::Stopped,
                port: 0,
                ..request(&[1; 20], 1)
            }, NOW);
            assert_eq!(outcome, Ok(AnnounceOutcome::Stopped));
            assert_eq!(ctx.store.hashes(), 0);
        }

        #[test]
        fn test_stopped_removes_peer() {
            let ctx = context(vec![], vec![0]);
            announced(ctx.announce.announce(&request(&[1; 20], 1), NOW));
            let outcome = ctx.announce.announce(&AnnounceQueryRequest { event: AnnounceEvent::Stopped, ..request(&[1; 20], 1) }, NOW);
            assert_eq!(outcome, Ok(AnnounceOutcome::Stopped));
            assert_eq!(ctx.store.hash_stats(&InfoHash(HASH)), (0, 0));
        }

        #[test]
        fn test_client_errors() {
            let ctx = context(vec![], vec![0]);
            let bad_hash = AnnounceQueryRequest { info_hash: &[1; 19], ..request(&[1; 20], 1) };
            assert_eq!(ctx.announce.announce(&bad_hash, NOW), Err(TrackerError::client("bad hash")));

            let bad_peer = request(&[1; 21], 1);
            assert_eq!(ctx.announce.announce(&bad_peer, NOW), Err(TrackerError::client("bad peerid")));

            for port in [0, -1, 65536] {
                let bad_port = AnnounceQueryRequest { port, ..request(&[1; 20], 1) };
                assert_eq!(ctx.announce.announce(&bad_port, NOW), Err(TrackerError::client("bad port")));
            }

            let bad_numwant = AnnounceQueryRequest { numwant: Some(-1), ..request(&[1; 20], 1) };
            assert_eq!(ctx.announce.announce(&bad_numwant, NOW), Err(TrackerError::client("bad numwant")));

            assert_eq!(ctx.stats.get_stats().client_errors, 6);
            assert_eq!(ctx.store.hashes(), 0);
        }

        #[test]
        fn test_numwant_resolution() {
            let ctx = context(vec![], vec![0]);
            assert_eq!(ctx.announce.resolve_numwant(None), Ok(50));
            assert_eq!(ctx.announce.resolve_numwant(Some(0)), Ok(0));
            assert_eq!(ctx.announce.resolve_numwant(Some(20)), Ok(20));
            assert_eq!(ctx.announce.resolve_numwant(Some(5000)), Ok(100));
        }

        #[test]
        fn test_baseline_hint() {
            let ctx = context(vec![String::from("10.0.0.1:6881")], vec![0]);
            let provider = announced(ctx.announce.announce(&AnnounceQueryRequest { left: Some(0), ..request(&[1; 20], 1) }, NOW));
            assert!(provider.baseline_hint.is_none());

            let leecher = announced(ctx.announce.announce(&request(&[2; 20], 2), NOW));
            assert_eq!(leecher.baseline_hint, Some(BaselineHint::Compact(vec![10, 0, 0, 1, 0x1a, 0xe1])));

            // a provider still downloading is hinted like anyone else
            let downloading = announced(ctx.announce.announce(&request(&[1; 20], 1), NOW));
            assert_eq!(downloading.baseline_hint, Some(BaselineHint::Compact(vec![10, 0, 0, 1, 0x1a, 0xe1])));

            let verbose = announced(ctx.announce.announce(&AnnounceQueryRequest { compact: false, no_peer_id: true, ..request(&[3; 20], 3) }, NOW));
            assert_eq!(verbose.baseline_hint, Some(BaselineHint::Verbose(b"d2:ip8:10.0.0.14:porti6881ee".to_vec())));
        }

        #[test]
        fn test_bad_actor_counted() {
            let mut config = Configuration::init();
            config.tracker_config.min_leechers = 1;
            let ctx = TrackerContext::with_random(Arc::new(config), Arc::new(SequenceRandom::new(vec![0])));
            announced(ctx.announce.announce(&AnnounceQueryRequest { downloaded: 10, ..request(&[1; 20], 1) }, NOW));
            let result = announced(ctx.announce.announce(&AnnounceQueryRequest { downloaded: 20, ..request(&[1; 20], 1) }, NOW));
            assert!(result.bad_actor);
            assert_eq!(ctx.stats.get_stats().bad_actors, 1);
        }
    }

    mod scrape_service_tests {
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::enums::tracker_error::TrackerError;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::scrape_entry::ScrapeEntry;
        use crate::tracker::structs::tracker_context::TrackerContext;
        use super::update;

        #[test]
        fn test_scrape_entries_in_request_order() {
            let ctx = TrackerContext::new(Arc::new(Configuration::init()));
            ctx.store.save(InfoHash([1; 20]), PeerId([1; 20]), &update(1, true, 0, 0, 0));
            ctx.store.save(InfoHash([1; 20]), PeerId([2; 20]), &update(2, false, 0, 0, 0));

            let entries = ctx.scrape.scrape(&[[9u8; 20], [1u8; 20]]).unwrap();
            assert_eq!(entries, vec![
                ScrapeEntry { complete: 0, incomplete: 0, downloaded: -1 },
                ScrapeEntry { complete: 1, incomplete: 1, downloaded: -1 },
            ]);
            assert_eq!(ctx.store.hashes(), 1);
        }

        #[test]
        fn test_scrape_limits() {
            let ctx = TrackerContext::new(Arc::new(Configuration::init()));
            assert_eq!(ctx.scrape.scrape(&vec![[0u8; 20]; 74]).map(|entries| entries.len()), Ok(74));
            assert_eq!(ctx.scrape.scrape(&vec![[0u8; 20]; 75]), Err(TrackerError::client("74 hashes max")));
            assert_eq!(ctx.scrape.scrape(&[vec![0u8; 19]]), Err(TrackerError::client("bad hash")));
            assert_eq!(ctx.stats.get_stats().scrapes, 3);
            assert_eq!(ctx.stats.get_stats().client_errors, 2);
        }
    }

    mod expiry_manager_tests {
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::tracker_context::TrackerContext;
        use super::update;

        #[test]
        fn test_sweep_updates_stats() {
            let ctx = TrackerContext::new(Arc::new(Configuration::init()));
            ctx.store.save(InfoHash([1; 20]), PeerId([1; 20]), &update(1, false, 0, 0, 0));
            ctx.store.save(InfoHash([2; 20]), PeerId([2; 20]), &update(2, false, 0, 0, 3000));

            let manager = ctx.expiry_manager();
            let totals = manager.sweep(2701);
            assert_eq!((totals.peers, totals.hashes), (1, 1));
            let stats = ctx.stats.get_stats();
            assert_eq!(stats.expired_peers, 1);
            assert_eq!(stats.expired_hashes, 1);
            assert_eq!(stats.leeches, 1);
            assert_eq!(ctx.store.hashes(), 1);
        }
    }
}
