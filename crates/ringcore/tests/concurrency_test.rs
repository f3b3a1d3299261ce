//! Readers racing a writer on a shared ring.

use ringcore::HashRing;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

const READERS: usize = 4;

#[test]
fn test_readers_during_add_remove() {
    let ring = Arc::new(HashRing::new(32));
    ring.add("stable");
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|r| {
            let ring = Arc::clone(&ring);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut lookups = 0usize;
                while !done.load(Ordering::Acquire) {
                    let key = format!("reader-{}-key-{}", r, lookups % 512);
                    let owner = ring.get(&key).expect("stable member is never removed");
                    // Only members that are ever present can come back
                    assert!(owner == "stable" || owner == "flappy", "got {}", owner);
                    lookups += 1;
                }
                lookups
            })
        })
        .collect();

    let writer = {
        let ring = Arc::clone(&ring);
        thread::spawn(move || {
            for _ in 0..200 {
                ring.add("flappy");
                ring.remove("flappy");
            }
        })
    };

    writer.join().unwrap();
    done.store(true, Ordering::Release);
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(ring.members(), vec!["stable".to_string()]);
    assert_eq!(ring.circle_len(), 32);
}

#[test]
fn test_swap_members_is_never_observed_half_done() {
    let ring = Arc::new(HashRing::new(16));
    ring.swap_members(["a1", "a2", "a3"]);
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let ring = Arc::clone(&ring);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            while !done.load(Ordering::Acquire) {
                let mut members = ring.members();
                members.sort();
                assert!(
                    members == ["a1", "a2", "a3"] || members == ["b1", "b2", "b3"],
                    "mixed membership {:?}",
                    members
                );
            }
        })
    };

    for round in 0..200 {
        if round % 2 == 0 {
            ring.swap_members(["b1", "b2", "b3"]);
        } else {
            ring.swap_members(["a1", "a2", "a3"]);
        }
    }

    done.store(true, Ordering::Release);
    reader.join().unwrap();
}

#[test]
fn test_snapshot_is_stable_under_writes() {
    let ring = Arc::new(HashRing::new(16));
    ring.force_set(["a", "b", "c"]);
    let snapshot = ring.snapshot();
    let expected: Vec<String> = (0..100)
        .map(|i| snapshot.get(format!("k{}", i)).unwrap().to_owned())
        .collect();

    let writer = {
        let ring = Arc::clone(&ring);
        thread::spawn(move || {
            for i in 0..50 {
                ring.add(&format!("extra-{}", i));
            }
            ring.force_set(["z"]);
        })
    };
    writer.join().unwrap();

    for (i, owner) in expected.iter().enumerate() {
        assert_eq!(snapshot.get(format!("k{}", i)).unwrap(), owner);
    }
    assert_eq!(ring.members(), vec!["z".to_string()]);
}
