mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use swarm_tracker::common::common::current_time;
use swarm_tracker::pool::structs::pools::Pools;
use swarm_tracker::stats::structs::stats_atomics::StatsAtomics;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::memory_peer_store::MemoryPeerStore;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::thread_random::ThreadRandom;
use swarm_tracker::tracker::traits::peer_store::PeerStore;

fn create_store() -> (Arc<MemoryPeerStore>, Arc<StatsAtomics>) {
    let stats = Arc::new(StatsAtomics::new(current_time()));
    let store = Arc::new(MemoryPeerStore::new(
        Arc::new(Pools::new(100)),
        stats.clone(),
        Arc::new(ThreadRandom),
        2,
        false,
    ));
    (store, stats)
}

#[test]
fn test_concurrent_saves_keep_counters_consistent() {
    let (store, stats) = create_store();
    let hashes: Vec<InfoHash> = (0..8u8).map(|n| InfoHash([n; 20])).collect();
    let now = current_time();

    let workers: Vec<_> = (0..8u32).map(|worker| {
        let store = store.clone();
        let hashes = hashes.clone();
        thread::spawn(move || {
            for i in 0..500u32 {
                let id = worker * 1000 + i;
                let mut peer_id = [0u8; 20];
                peer_id[..4].copy_from_slice(&id.to_be_bytes());
                let hash = hashes[(i as usize) % hashes.len()];
                store.save(hash, PeerId(peer_id), &common::peer_update(id, i % 3 == 0, now));
                if i % 5 == 0 {
                    store.save(hash, PeerId(peer_id), &common::peer_update(id, true, now));
                }
                if i % 7 == 0 {
                    store.drop_peer(&hash, &PeerId(peer_id), false);
                }
            }
        })
    }).collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let mut complete = 0;
    let mut incomplete = 0;
    for hash in &hashes {
        let (c, i) = store.hash_stats(hash);
        complete += c as i64;
        incomplete += i as i64;
    }
    assert_eq!((complete + incomplete) as usize, store.peers());
    let global = stats.get_stats();
    assert_eq!(global.seeds, complete);
    assert_eq!(global.leeches, incomplete);
    assert_eq!(global.unique_ips as usize, store.peers());
}

#[test]
fn test_concurrent_workers_on_one_swarm_match_ground_truth() {
    let (store, stats) = create_store();
    let hash = common::random_info_hash();
    let now = current_time();

    // each worker owns 64 peers and scripts saves, completions and drops on them
    let workers: Vec<_> = (0..16u32).map(|worker| {
        let store = store.clone();
        thread::spawn(move || {
            let mut expected: HashMap<u32, bool> = HashMap::new();
            for i in 0..2000u32 {
                let id = worker * 64 + (i * 31 + worker) % 64;
                let mut peer_id = [0u8; 20];
                peer_id[..4].copy_from_slice(&id.to_be_bytes());
                match (i * 17 + worker * 5) % 10 {
                    0..=2 => {
                        store.drop_peer(&hash, &PeerId(peer_id), false);
                        expected.remove(&id);
                    }
                    action => {
                        let complete = action <= 5;
                        store.save(hash, PeerId(peer_id), &common::peer_update(id, complete, now));
                        expected.insert(id, complete);
                    }
                }
            }
            expected
        })
    }).collect();

    let mut complete = 0u32;
    let mut incomplete = 0u32;
    for worker in workers {
        for seeding in worker.join().unwrap().into_values() {
            if seeding {
                complete += 1;
            } else {
                incomplete += 1;
            }
        }
    }

    assert!(complete > 0 && incomplete > 0);
    assert_eq!(store.hash_stats(&hash), (complete, incomplete));
    assert_eq!(store.peers(), (complete + incomplete) as usize);
    let global = stats.get_stats();
    assert_eq!(global.seeds, complete as i64);
    assert_eq!(global.leeches, incomplete as i64);
}

#[test]
fn test_trim_races_with_saves() {
    let (store, stats) = create_store();
    let hash = common::random_info_hash();
    let now = current_time();

    for n in 0..200u32 {
        store.save(hash, common::random_peer_id(), &common::peer_update(n, n % 2 == 0, now - 1000));
    }

    let saver = {
        let store = store.clone();
        thread::spawn(move || {
            for n in 200..400u32 {
                store.save(hash, common::random_peer_id(), &common::peer_update(n, false, now));
            }
        })
    };
    let trimmed = store.trim(now, 500);
    saver.join().unwrap();

    assert_eq!(trimmed.peers, 200);
    assert_eq!(store.hash_stats(&hash), (0, 200));
    assert_eq!(stats.get_stats().leeches, 200);
    assert_eq!(stats.get_stats().seeds, 0);
}

#[test]
fn test_peer_list_bytes_respects_numwant_under_load() {
    let (store, _) = create_store();
    let hash = common::random_info_hash();
    let now = current_time();
    for n in 0..150u32 {
        store.save(hash, common::random_peer_id(), &common::peer_update(n, false, now));
    }

    let mut ipv4 = Vec::with_capacity(600);
    let mut ipv6 = Vec::with_capacity(1800);
    assert_eq!(store.peer_list_bytes(&hash, 30, &mut ipv4, &mut ipv6), 30);
    assert_eq!(ipv4.len(), 180);
    assert!(ipv6.is_empty());

    assert_eq!(store.peer_list(&hash, 10, true).len(), 10);
}
