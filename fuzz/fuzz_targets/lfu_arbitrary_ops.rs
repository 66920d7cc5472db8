#![no_main]

use libfuzzer_sys::fuzz_target;
use lfukit::policy::lfu::LfuCache;
use lfukit::traits::{CoreCache, LfuCacheTrait, MutableCache};

// Fuzz arbitrary operation sequences on LfuCache.
//
// Runs random sequences of insert, get, remove, pop_lfu, peek_lfu, and
// clear against caches of varying capacity, validating the full set of
// structural invariants after every operation.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let capacity = usize::from(data[0] % 16) + 1;
    let mut cache: LfuCache<u32, u32> = LfuCache::new(capacity);

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 8;
        let key = u32::from(data[idx + 1] % 32);
        let value = u32::from(data[idx + 2]);

        match op {
            0 | 1 => {
                cache.insert(key, value);
            }
            2 => {
                let _ = cache.get(&key);
            }
            3 => {
                let _ = cache.get_or(&key, value);
            }
            4 => {
                let _ = cache.remove(&key);
            }
            5 => {
                let _ = cache.pop_lfu();
            }
            6 => {
                let _ = cache.peek_lfu();
                let _ = cache.frequency(&key);
            }
            _ => {
                cache.clear();
            }
        }

        assert!(cache.len() <= cache.capacity());
        cache.check_invariants().expect("invariant violated");

        if cache.is_empty() {
            assert_eq!(cache.peek_lfu(), None);
        } else {
            assert!(cache.peek_lfu().is_some());
        }
        if cache.contains(&key) {
            assert!(cache.frequency(&key).unwrap() >= 1);
        }

        idx += 3;
    }
});
