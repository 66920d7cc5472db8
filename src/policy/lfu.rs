//! Fixed-capacity LFU (Least Frequently Used) cache with O(1) operations.
//!
//! Evicts the entry with the lowest access frequency when capacity is
//! reached; among entries tied at the lowest frequency, the least recently
//! touched one goes first.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        LfuCache<K, V, S>                         │
//!   │                                                                  │
//!   │   index: HashMap<K, SlotId, S>      entries: SlotPool<Entry>     │
//!   │   ┌──────────┬─────────┐            ┌──────┬──────────────────┐  │
//!   │   │   Key    │ SlotId  │            │ Slot │ key, value, freq │  │
//!   │   ├──────────┼─────────┤            ├──────┼──────────────────┤  │
//!   │   │ "page_a" │  id_0   │───────────►│ id_0 │ freq 2, links    │  │
//!   │   │ "page_b" │  id_1   │───────────►│ id_1 │ freq 1, links    │  │
//!   │   │ "page_c" │  id_2   │───────────►│ id_2 │ freq 1, links    │  │
//!   │   └──────────┴─────────┘            └──────┴──────────────────┘  │
//!   │                                                                  │
//!   │   buckets: FxHashMap<u64, Bucket>   (frequency → entry list)     │
//!   │                                                                  │
//!   │   min_freq = 1                                                   │
//!   │        │                                                         │
//!   │        ▼                                                         │
//!   │   freq=1: head ──► [id_2] ◄──► [id_1] ◄── tail (evict first)     │
//!   │   freq=2: head ──► [id_0] ◄── tail                               │
//!   │                                                                  │
//!   │   bucket chain: freq=1 ──next──► freq=2 ──prev──► freq=1         │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A hit removes the entry from its current bucket, bumps its frequency by
//! one, and pushes it to the head of the bucket for the new frequency
//! (created on demand, erased the instant it empties). `min_freq` always
//! names the lowest occupied bucket, so eviction is a tail pop.
//!
//! ## Operations
//!
//! | Operation            | Time  | Notes                                   |
//! |----------------------|-------|-----------------------------------------|
//! | `insert`             | O(1)* | Bumps frequency on update; may evict    |
//! | `get`                | O(1)  | Hit bumps frequency, moves to MRU       |
//! | `get_or` / `get_or_default` | O(1) | Same hit path, miss substitutes  |
//! | `contains` / `frequency` / `peek_lfu` | O(1) | No frequency effects   |
//! | `remove` / `pop_lfu` | O(1)  |                                         |
//! | `clear`              | O(n)  | Capacity unchanged                      |
//!
//! ## Example
//!
//! ```
//! use lfukit::policy::lfu::LfuCache;
//! use lfukit::traits::{CoreCache, LfuCacheTrait};
//!
//! let mut cache = LfuCache::new(3);
//! cache.insert(1, "a");
//! cache.insert(2, "b");
//! cache.insert(3, "c");
//!
//! cache.get(&1); // key 1 now at frequency 2
//!
//! // At capacity: key 2 is evicted (frequency 1, touched before key 3).
//! cache.insert(4, "d");
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.frequency(&1), Some(2));
//! ```
//!
//! ## Thread safety
//!
//! Not thread-safe. Every operation, including lookups, mutates frequency
//! state, so concurrent callers must hold an external lock around all of
//! them (for example `Arc<Mutex<LfuCache<..>>>`).

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::ds::slot_pool::{SlotId, SlotPool};
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::metrics::{LfuMetrics, LfuMetricsSnapshot};
use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};

/// Pooled cache entry.
/// Link fields are touched on every bucket operation and sit first;
/// key and value are only read on hit or eviction.
#[derive(Debug)]
#[repr(C)]
struct Entry<K, V> {
    prev: Option<SlotId>,
    next: Option<SlotId>,
    freq: u64,
    key: K,
    value: V,
}

/// One frequency's entry list plus its links in the ordered bucket chain.
/// `head` is the most recently touched entry at this frequency, `tail`
/// the eviction victim.
#[derive(Debug, Default)]
struct Bucket {
    head: Option<SlotId>,
    tail: Option<SlotId>,
    prev: Option<u64>,
    next: Option<u64>,
}

/// Fixed-capacity LFU cache.
///
/// Capacity is set at construction and never changes; zero capacity is
/// rejected. See the module documentation for the eviction rules.
///
/// # Type Parameters
///
/// - `K`: key type, `Eq + Hash + Clone` (the key lives in both the index
///   and its pool slot)
/// - `V`: value type
/// - `S`: key-hashing strategy, defaults to [`FxBuildHasher`]
pub struct LfuCache<K, V, S = FxBuildHasher>
where
    K: Eq + Hash + Clone,
{
    entries: SlotPool<Entry<K, V>>,
    index: HashMap<K, SlotId, S>,
    buckets: FxHashMap<u64, Bucket>,
    min_freq: u64,
    #[cfg(feature = "metrics")]
    metrics: LfuMetrics,
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("LfuCache");
        d.field("entries", &self.entries)
            .field("index", &self.index)
            .field("buckets", &self.buckets)
            .field("min_freq", &self.min_freq);
        #[cfg(feature = "metrics")]
        d.field("metrics", &self.metrics);
        d.finish()
    }
}

impl<K, V> LfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) to
    /// handle that without panicking.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|err| panic!("invalid cache configuration: {err}"))
    }

    /// Creates a cache holding at most `capacity` entries, rejecting a
    /// zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_hasher(capacity, FxBuildHasher)
    }
}

impl<K, V, S> LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates a cache with a caller-supplied key-hashing strategy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self::try_with_hasher(capacity, hasher)
            .unwrap_or_else(|err| panic!("invalid cache configuration: {err}"))
    }

    /// Creates a cache with a caller-supplied key-hashing strategy,
    /// rejecting a zero capacity.
    pub fn try_with_hasher(capacity: usize, hasher: S) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("lfu cache capacity must be greater than zero"));
        }
        Ok(Self {
            entries: SlotPool::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            buckets: FxHashMap::default(),
            min_freq: 0,
            #[cfg(feature = "metrics")]
            metrics: LfuMetrics::default(),
        })
    }

    /// Looks up `key`, returning a clone of the value on a hit and
    /// `default` on a miss.
    ///
    /// The hit path is identical to [`get`](CoreCache::get): the entry's
    /// frequency is bumped. A miss has no side effects.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.insert(1, 10);
    /// assert_eq!(cache.get_or(&1, 0), 10);
    /// assert_eq!(cache.get_or(&9, 0), 0);
    /// ```
    pub fn get_or(&mut self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Looks up `key`, returning a clone of the value on a hit and
    /// `V::default()` on a miss.
    ///
    /// Shares the hit path with [`get`](CoreCache::get); differs only in
    /// miss handling.
    pub fn get_or_default(&mut self, key: &K) -> V
    where
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    fn bucket_is_empty(&self, freq: u64) -> bool {
        self.buckets
            .get(&freq)
            .map(|bucket| bucket.head.is_none())
            .unwrap_or(true)
    }

    fn insert_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        self.buckets.insert(
            freq,
            Bucket {
                head: None,
                tail: None,
                prev,
                next,
            },
        );

        if let Some(prev) = prev
            && let Some(prev_bucket) = self.buckets.get_mut(&prev)
        {
            prev_bucket.next = Some(freq);
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = Some(freq);
        }
    }

    fn remove_bucket(&mut self, freq: u64, prev: Option<u64>, next: Option<u64>) {
        if let Some(prev) = prev
            && let Some(prev_bucket) = self.buckets.get_mut(&prev)
        {
            prev_bucket.next = next;
        }
        if let Some(next) = next
            && let Some(next_bucket) = self.buckets.get_mut(&next)
        {
            next_bucket.prev = prev;
        }
        self.buckets.remove(&freq);
    }

    fn list_push_front(&mut self, freq: u64, id: SlotId) {
        let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");

        let old_head = bucket.head;
        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = old_head;
        }
        if let Some(old_head) = old_head {
            if let Some(entry) = self.entries.get_mut(old_head) {
                entry.prev = Some(id);
            }
        } else {
            bucket.tail = Some(id);
        }
        bucket.head = Some(id);
    }

    fn list_remove(&mut self, freq: u64, id: SlotId) {
        let (prev, next) = {
            let entry = self.entries.get(id).expect("lfu entry missing");
            (entry.prev, entry.next)
        };

        let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
        if let Some(prev) = prev {
            if let Some(entry) = self.entries.get_mut(prev) {
                entry.next = next;
            }
        } else {
            bucket.head = next;
        }
        if let Some(next) = next {
            if let Some(entry) = self.entries.get_mut(next) {
                entry.prev = prev;
            }
        } else {
            bucket.tail = prev;
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.prev = None;
            entry.next = None;
        }
    }

    /// The one place frequency-update logic lives: removes the slot from
    /// its current bucket, bumps the frequency by one, and pushes it to
    /// the head of the bucket for the new frequency. Returns the new
    /// frequency.
    fn touch_slot(&mut self, id: SlotId) -> u64 {
        let current = self.entries.get(id).expect("lfu entry missing").freq;
        if current == u64::MAX {
            // Saturated: refresh recency within the bucket, frequency unchanged.
            self.list_remove(current, id);
            self.list_push_front(current, id);
            return current;
        }
        let next_freq = current + 1;

        let (prev_freq, next_existing) = {
            let bucket = self.buckets.get(&current).expect("lfu bucket missing");
            (bucket.prev, bucket.next)
        };

        self.list_remove(current, id);
        let bucket_empty = self.bucket_is_empty(current);

        if bucket_empty {
            self.remove_bucket(current, prev_freq, next_existing);
            if self.min_freq == current {
                self.min_freq = next_existing.unwrap_or(0);
            }
        }

        if !self.buckets.contains_key(&next_freq) {
            let prev = if bucket_empty {
                prev_freq
            } else {
                Some(current)
            };
            self.insert_bucket(next_freq, prev, next_existing);
        }

        if let Some(entry) = self.entries.get_mut(id) {
            entry.freq = next_freq;
        }
        self.list_push_front(next_freq, id);
        if self.min_freq == 0 || next_freq < self.min_freq {
            self.min_freq = next_freq;
        }

        next_freq
    }

    /// Removes the eviction victim: the tail of the `min_freq` bucket.
    fn evict_min(&mut self) -> Option<(K, V)> {
        let freq = self.min_freq;
        if freq == 0 {
            return None;
        }

        let id = self.buckets.get(&freq).and_then(|bucket| bucket.tail)?;
        self.list_remove(freq, id);

        if self.bucket_is_empty(freq) {
            let (prev, next) = {
                let bucket = self.buckets.get(&freq).expect("lfu bucket missing");
                (bucket.prev, bucket.next)
            };
            self.remove_bucket(freq, prev, next);
            if self.min_freq == freq {
                self.min_freq = next.unwrap_or(0);
            }
        }

        let entry = self.entries.release(id).expect("lfu entry missing");
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }
}

impl<K, V, S> CoreCache<K, V> for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = {
                let entry = self.entries.get_mut(id).expect("lfu entry missing");
                mem::replace(&mut entry.value, value)
            };
            // An update counts as an access.
            self.touch_slot(id);
            return Some(previous);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.entries.is_full() {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some((_key, _value)) = self.evict_min() {
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.entries.acquire(Entry {
            prev: None,
            next: None,
            freq: 1,
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        if !self.buckets.contains_key(&1) {
            let next = if self.min_freq == 0 {
                None
            } else {
                Some(self.min_freq)
            };
            self.insert_bucket(1, None, next);
        }
        self.list_push_front(1, id);
        // A fresh insertion always makes 1 the minimum.
        self.min_freq = 1;

        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(id) => *id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        self.touch_slot(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.entries.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.buckets.clear();
        self.min_freq = 0;
    }
}

impl<K, V, S> MutableCache<K, V> for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let freq = self.entries.get(id).expect("lfu entry missing").freq;

        self.list_remove(freq, id);
        if self.bucket_is_empty(freq) {
            let (prev, next) = {
                let bucket = self.buckets.get(&freq).expect("lfu bucket missing");
                (bucket.prev, bucket.next)
            };
            self.remove_bucket(freq, prev, next);
            if self.min_freq == freq {
                self.min_freq = next.unwrap_or(0);
            }
        }

        self.entries.release(id).map(|entry| entry.value)
    }
}

impl<K, V, S> LfuCacheTrait<K, V> for LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn pop_lfu(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lfu_call();

        let result = self.evict_min();

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_pop_lfu_found();
        }

        result
    }

    fn peek_lfu(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lfu_call();

        if self.min_freq == 0 {
            return None;
        }
        let id = self.buckets.get(&self.min_freq).and_then(|bucket| bucket.tail)?;
        let entry = self.entries.get(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lfu_found();

        Some((&entry.key, &entry.value))
    }

    fn frequency(&self, key: &K) -> Option<u64> {
        #[cfg(feature = "metrics")]
        self.metrics.record_frequency_call();

        let result = self
            .index
            .get(key)
            .and_then(|id| self.entries.get(*id))
            .map(|entry| entry.freq);

        #[cfg(feature = "metrics")]
        if result.is_some() {
            self.metrics.record_frequency_found();
        }

        result
    }
}

#[cfg(feature = "metrics")]
impl<K, V, S> LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns an owned snapshot of the operation counters.
    pub fn metrics_snapshot(&self) -> LfuMetricsSnapshot {
        LfuMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            pop_lfu_calls: self.metrics.pop_lfu_calls,
            pop_lfu_found: self.metrics.pop_lfu_found,
            peek_lfu_calls: self.metrics.peek_lfu_calls.get(),
            peek_lfu_found: self.metrics.peek_lfu_found.get(),
            frequency_calls: self.metrics.frequency_calls.get(),
            frequency_found: self.metrics.frequency_found.get(),
            cache_len: self.entries.len(),
            capacity: self.entries.capacity(),
        }
    }
}

#[cfg(any(test, debug_assertions))]
impl<K, V, S> LfuCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Verifies every structural invariant; available in test and debug
    /// builds for property tests and fuzzing.
    ///
    /// Checks: index and pool agree on length, length within capacity,
    /// `min_freq` names the lowest occupied bucket, the bucket chain is
    /// ordered and doubly linked, every bucket list is non-empty and
    /// consistent, and every entry's frequency matches its bucket.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        fn ensure(cond: bool, msg: &str) -> Result<(), InvariantError> {
            if cond {
                Ok(())
            } else {
                Err(InvariantError::new(msg))
            }
        }

        ensure(self.entries.len() <= self.entries.capacity(), "len exceeds capacity")?;
        ensure(
            self.entries.len() == self.index.len(),
            "key index and entry pool disagree on length",
        )?;

        if self.entries.is_empty() {
            ensure(self.min_freq == 0, "min_freq set on an empty cache")?;
            ensure(self.buckets.is_empty(), "empty cache still holds buckets")?;
            return Ok(());
        }

        ensure(self.min_freq > 0, "min_freq unset on a non-empty cache")?;
        ensure(
            self.buckets.contains_key(&self.min_freq),
            "min_freq names a missing bucket",
        )?;

        let mut walked = 0usize;
        for (&freq, bucket) in &self.buckets {
            ensure(
                bucket.head.is_some() && bucket.tail.is_some(),
                "empty bucket was not erased",
            )?;
            ensure(freq >= self.min_freq, "bucket exists below min_freq")?;

            if let Some(prev) = bucket.prev {
                ensure(prev < freq, "bucket chain out of order")?;
                let prev_bucket = self
                    .buckets
                    .get(&prev)
                    .ok_or_else(|| InvariantError::new("bucket prev link dangles"))?;
                ensure(prev_bucket.next == Some(freq), "bucket chain next link broken")?;
            } else {
                ensure(freq == self.min_freq, "chain-head bucket is not the minimum")?;
            }
            if let Some(next) = bucket.next {
                ensure(next > freq, "bucket chain out of order")?;
                let next_bucket = self
                    .buckets
                    .get(&next)
                    .ok_or_else(|| InvariantError::new("bucket next link dangles"))?;
                ensure(next_bucket.prev == Some(freq), "bucket chain prev link broken")?;
            }

            let mut current = bucket.head;
            let mut last = None;
            while let Some(id) = current {
                let entry = self
                    .entries
                    .get(id)
                    .ok_or_else(|| InvariantError::new("bucket links to a dead slot"))?;
                ensure(entry.freq == freq, "entry frequency disagrees with its bucket")?;
                ensure(entry.prev == last, "entry prev link broken")?;
                ensure(
                    self.index.get(&entry.key) == Some(&id),
                    "key index disagrees with entry slot",
                )?;
                last = Some(id);
                current = entry.next;
                walked += 1;
            }
            ensure(bucket.tail == last, "bucket tail does not terminate its list")?;
        }
        ensure(walked == self.entries.len(), "bucket lists do not cover every entry")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = LfuCache::<u32, u32>::try_new(0).unwrap_err();
            assert!(err.to_string().contains("capacity"));
        }

        #[test]
        #[should_panic(expected = "invalid cache configuration")]
        fn new_panics_on_zero_capacity() {
            let _ = LfuCache::<u32, u32>::new(0);
        }

        #[test]
        fn capacity_is_fixed_at_construction() {
            let mut cache = LfuCache::new(4);
            assert_eq!(cache.capacity(), 4);
            for i in 0..100u32 {
                cache.insert(i, i);
            }
            assert_eq!(cache.capacity(), 4);
            assert_eq!(cache.len(), 4);
        }

        #[test]
        fn custom_hasher_behaves_like_default() {
            use std::collections::hash_map::RandomState;

            let mut cache = LfuCache::with_hasher(2, RandomState::new());
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.get(&"a"), Some(&1));
            cache.insert("c", 3);
            assert_eq!(cache.len(), 2);
            assert!(!cache.contains(&"b"));
        }
    }

    mod basic_behavior {
        use super::*;

        #[test]
        fn insert_then_get_round_trips() {
            let mut cache = LfuCache::new(3);
            assert_eq!(cache.insert("k1", 100), None);
            assert_eq!(cache.insert("k2", 200), None);
            assert_eq!(cache.insert("k3", 300), None);

            assert_eq!(cache.get(&"k1"), Some(&100));
            assert_eq!(cache.get(&"k2"), Some(&200));
            assert_eq!(cache.get(&"k3"), Some(&300));
            assert_eq!(cache.get(&"missing"), None);

            // Frequency 1 from insert, +1 from the get above.
            assert_eq!(cache.frequency(&"k1"), Some(2));
            assert_eq!(cache.frequency(&"k2"), Some(2));
            assert_eq!(cache.frequency(&"k3"), Some(2));
        }

        #[test]
        fn update_bumps_frequency_without_growing() {
            let mut cache = LfuCache::new(3);
            cache.insert("k", 1);
            assert_eq!(cache.frequency(&"k"), Some(1));

            assert_eq!(cache.insert("k", 2), Some(1));
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.frequency(&"k"), Some(2));

            assert_eq!(cache.get(&"k"), Some(&2));
            assert_eq!(cache.frequency(&"k"), Some(3));
        }

        #[test]
        fn frequency_counts_every_access() {
            let mut cache = LfuCache::new(5);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.insert("c", 3);

            cache.get(&"a");
            cache.get(&"a");
            cache.get(&"a");
            cache.get(&"b");

            assert_eq!(cache.frequency(&"a"), Some(4));
            assert_eq!(cache.frequency(&"b"), Some(2));
            assert_eq!(cache.frequency(&"c"), Some(1));
            assert_eq!(cache.frequency(&"missing"), None);
        }

        #[test]
        fn capacity_bound_holds_under_churn() {
            let mut cache = LfuCache::new(2);
            for i in 0..50u32 {
                cache.insert(i, i * 10);
                assert!(cache.len() <= cache.capacity());
            }
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn contains_has_no_frequency_effect() {
            let mut cache = LfuCache::new(2);
            cache.insert("k", 1);
            for _ in 0..5 {
                assert!(cache.contains(&"k"));
            }
            assert_eq!(cache.frequency(&"k"), Some(1));
        }
    }

    mod lookup_variants {
        use super::*;

        #[test]
        fn miss_handling_differs_per_variant() {
            let mut cache: LfuCache<&str, u32> = LfuCache::new(2);
            assert_eq!(cache.get(&"missing"), None);
            assert_eq!(cache.get_or_default(&"missing"), 0);
            assert_eq!(cache.get_or(&"missing", 42), 42);

            // Misses leave no trace.
            assert!(cache.is_empty());
            assert!(!cache.contains(&"missing"));
        }

        #[test]
        fn hit_path_is_shared() {
            let mut cache = LfuCache::new(2);
            cache.insert("k", 10);

            assert_eq!(cache.get_or(&"k", 99), 10);
            assert_eq!(cache.frequency(&"k"), Some(2));

            assert_eq!(cache.get_or_default(&"k"), 10);
            assert_eq!(cache.frequency(&"k"), Some(3));

            assert_eq!(cache.get(&"k"), Some(&10));
            assert_eq!(cache.frequency(&"k"), Some(4));
        }
    }

    mod eviction {
        use super::*;

        #[test]
        fn victim_is_lowest_frequency_then_least_recently_touched() {
            let mut cache = LfuCache::new(3);
            cache.insert(1, "a");
            cache.insert(2, "b");
            cache.insert(3, "c");
            assert_eq!(cache.len(), 3);

            assert_eq!(cache.get(&1), Some(&"a")); // key 1 → frequency 2

            // Keys 2 and 3 are tied at frequency 1; 3 was touched later,
            // so 2 is the tail and goes first.
            cache.insert(4, "d");
            assert!(!cache.contains(&2));
            assert!(cache.contains(&1));
            assert!(cache.contains(&3));
            assert!(cache.contains(&4));

            cache.get(&3);
            cache.get(&3); // key 3 → frequency 3

            // Key 4 is now the only frequency-1 entry.
            cache.insert(5, "e");
            assert!(!cache.contains(&4));
            assert!(cache.contains(&1));
            assert!(cache.contains(&3));
            assert!(cache.contains(&5));
        }

        #[test]
        fn pop_lfu_drains_in_victim_order() {
            let mut cache = LfuCache::new(3);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.insert("c", 3);
            cache.get(&"c"); // "c" → frequency 2

            assert_eq!(cache.pop_lfu(), Some(("a", 1)));
            assert_eq!(cache.pop_lfu(), Some(("b", 2)));
            assert_eq!(cache.pop_lfu(), Some(("c", 3)));
            assert_eq!(cache.pop_lfu(), None);
        }

        #[test]
        fn peek_lfu_is_side_effect_free() {
            let mut cache = LfuCache::new(3);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.get(&"b");

            assert_eq!(cache.peek_lfu(), Some((&"a", &1)));
            assert_eq!(cache.peek_lfu(), Some((&"a", &1)));
            assert_eq!(cache.frequency(&"a"), Some(1));
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn update_refreshes_victim_order() {
            let mut cache = LfuCache::new(2);
            cache.insert(1, "x");
            cache.insert(2, "y");

            // Updating key 1 bumps it to frequency 2; key 2 becomes the victim.
            cache.insert(1, "x2");
            cache.insert(3, "z");
            assert!(!cache.contains(&2));
            assert_eq!(cache.get(&1), Some(&"x2"));
            assert!(cache.contains(&3));
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn single_slot_cache_churns() {
            let mut cache = LfuCache::new(1);
            cache.insert("a", 1);
            assert_eq!(cache.get(&"a"), Some(&1));

            cache.insert("b", 2);
            assert_eq!(cache.len(), 1);
            assert!(!cache.contains(&"a"));
            assert_eq!(cache.get(&"b"), Some(&2));

            assert_eq!(cache.insert("b", 3), Some(2));
            assert_eq!(cache.get(&"b"), Some(&3));
        }

        #[test]
        fn remove_clears_every_trace() {
            let mut cache = LfuCache::new(3);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.get(&"b");

            assert_eq!(cache.remove(&"b"), Some(2));
            assert_eq!(cache.len(), 1);
            assert!(!cache.contains(&"b"));
            assert_eq!(cache.frequency(&"b"), None);
            assert_eq!(cache.remove(&"b"), None);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn remove_of_last_min_entry_repairs_min_freq() {
            let mut cache = LfuCache::new(3);
            cache.insert(1, "a");
            cache.insert(2, "b");
            cache.insert(3, "c");
            cache.get(&2);
            cache.get(&3);

            // Key 1 is the only frequency-1 entry; removing it leaves
            // frequency 2 as the minimum.
            cache.remove(&1);
            cache.check_invariants().unwrap();

            cache.insert(4, "d");
            cache.insert(5, "e"); // evicts key 4, the only frequency-1 entry
            assert!(!cache.contains(&4));
            assert!(cache.contains(&2));
            assert!(cache.contains(&3));
            assert!(cache.contains(&5));
        }

        #[test]
        fn clear_resets_state_but_not_capacity() {
            let mut cache = LfuCache::new(3);
            cache.insert(1, "a");
            cache.insert(2, "b");
            cache.get(&1);

            cache.clear();
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.capacity(), 3);
            assert_eq!(cache.frequency(&1), None);
            assert_eq!(cache.pop_lfu(), None);
            cache.check_invariants().unwrap();

            // Refills to capacity without evicting.
            cache.insert(10, "x");
            cache.insert(11, "y");
            cache.insert(12, "z");
            assert_eq!(cache.len(), 3);
            assert!(cache.contains(&10) && cache.contains(&11) && cache.contains(&12));
        }

        #[test]
        fn empty_cache_probes_return_nothing() {
            let mut cache = LfuCache::<u32, u32>::new(4);
            assert_eq!(cache.get(&1), None);
            assert_eq!(cache.remove(&1), None);
            assert_eq!(cache.pop_lfu(), None);
            assert_eq!(cache.peek_lfu(), None);
            assert_eq!(cache.frequency(&1), None);
            cache.check_invariants().unwrap();
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn structure_survives_mixed_workload() {
            let mut cache = LfuCache::new(16);
            for i in 0..2_000u64 {
                let key = (i * 7) % 48;
                match i % 5 {
                    0 | 1 => {
                        cache.insert(key, i);
                    },
                    2 => {
                        let _ = cache.get(&key);
                    },
                    3 => {
                        let _ = cache.remove(&(key / 2));
                    },
                    _ => {
                        let _ = cache.pop_lfu();
                    },
                }
                assert!(cache.len() <= cache.capacity());
                if i % 50 == 0 {
                    cache.check_invariants().unwrap();
                }
            }
            cache.check_invariants().unwrap();
        }

        #[test]
        fn peeked_victim_is_what_eviction_removes() {
            let mut cache = LfuCache::new(4);
            for i in 0..4u32 {
                cache.insert(i, i);
            }
            cache.get(&0);
            cache.get(&2);

            let victim = cache.peek_lfu().map(|(k, _)| *k).unwrap();
            cache.insert(99, 99);
            assert!(!cache.contains(&victim));
            cache.check_invariants().unwrap();
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics_counters {
        use super::*;

        #[test]
        fn counters_track_operations() {
            let mut cache = LfuCache::new(2);
            cache.insert(1, "a");
            cache.insert(2, "b");
            cache.insert(1, "a2"); // update
            cache.insert(3, "c"); // evicts

            cache.get(&1);
            cache.get(&99);
            let _ = cache.peek_lfu();
            let _ = cache.frequency(&1);

            let snapshot = cache.metrics_snapshot();
            assert_eq!(snapshot.insert_calls, 4);
            assert_eq!(snapshot.insert_updates, 1);
            assert_eq!(snapshot.insert_new, 3);
            assert_eq!(snapshot.evict_calls, 1);
            assert_eq!(snapshot.evicted_entries, 1);
            assert_eq!(snapshot.get_calls, 2);
            assert_eq!(snapshot.get_hits, 1);
            assert_eq!(snapshot.get_misses, 1);
            assert_eq!(snapshot.peek_lfu_calls, 1);
            assert_eq!(snapshot.frequency_calls, 1);
            assert_eq!(snapshot.cache_len, 2);
            assert_eq!(snapshot.capacity, 2);
            assert!((snapshot.hit_rate() - 0.5).abs() < f64::EPSILON);
        }
    }
}
