// ==============================================
// EXTERNAL SERIALIZATION CONTRACT (integration)
// ==============================================
//
// The cache is a single-owner data structure; even read-style calls like
// `get` mutate frequency state. Concurrent callers therefore wrap every
// operation in an external lock. This test exercises that contract.

use std::sync::Arc;
use std::thread;

use lfukit::prelude::*;
use parking_lot::Mutex;

#[test]
fn externally_locked_cache_survives_concurrent_callers() {
    let cache = Arc::new(Mutex::new(LfuCache::<u64, u64>::new(128)));

    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..2_000u64 {
                    let key = t * 1_000 + (i % 300);
                    let mut guard = cache.lock();
                    guard.insert(key, i);
                    let _ = guard.get(&key);
                    if i % 7 == 0 {
                        let _ = guard.pop_lfu();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let guard = cache.lock();
    assert!(guard.len() <= guard.capacity());
    guard.check_invariants().unwrap();
}

#[test]
fn locked_cache_serves_hits_across_threads() {
    let cache = Arc::new(Mutex::new(LfuCache::<u32, String>::new(8)));
    cache.lock().insert(1, "shared".to_string());

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.lock().get_or(&1, String::new()))
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), "shared");
    }

    // One insert plus three locked lookups.
    assert_eq!(cache.lock().frequency(&1), Some(4));
}
