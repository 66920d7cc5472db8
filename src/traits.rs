//! # Cache Trait Hierarchy
//!
//! Defines the trait seams of the cache surface, split so that generic code
//! can ask for exactly the operations it needs.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&mut, &K) → Option<V>           │
//!   │  remove_batch(&mut, &[K])               │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           LfuCacheTrait<K, V>           │
//!   │                                         │
//!   │  pop_lfu(&mut) → Option<(K, V)>         │
//!   │  peek_lfu(&) → Option<(&K, &V)>         │
//!   │  frequency(&, &K) → Option<u64>         │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! | Trait           | Extends        | Purpose                              |
//! |-----------------|----------------|--------------------------------------|
//! | `CoreCache`     | -              | Universal cache operations           |
//! | `MutableCache`  | `CoreCache`    | Adds arbitrary key removal           |
//! | `LfuCacheTrait` | `MutableCache` | Frequency-ordered eviction + probes  |
//!
//! Frequency state changes through exactly two doors: a successful `get`
//! and an `insert` that updates an existing key. `contains`, `peek_lfu`,
//! and `frequency` are side-effect free, so generic code holding only a
//! shared reference can never perturb eviction order.

/// Core cache operations that every cache supports.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// An insert over an existing key counts as an access: the entry's
    /// position in the eviction order is refreshed the same way a `get`
    /// would refresh it. If the cache is full and the key is new, an entry
    /// is evicted first.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// Updates eviction state on a hit. Use [`contains`](Self::contains)
    /// to check existence without affecting eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "value");
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity, fixed at construction.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::{CoreCache, MutableCache};
///
/// fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LfuCache::new(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// invalidate(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning the removed values in input order.
    ///
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LFU-specific operations that respect frequency order.
///
/// Entries are ordered by access frequency; among entries sharing the
/// lowest frequency, the least recently touched one is the eviction
/// victim.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::{CoreCache, LfuCacheTrait};
///
/// let mut cache = LfuCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
///
/// // Three accesses on key 1: frequency 1 (insert) + 3 (gets) = 4.
/// cache.get(&1);
/// cache.get(&1);
/// cache.get(&1);
/// assert_eq!(cache.frequency(&1), Some(4));
/// assert_eq!(cache.frequency(&2), Some(1));
///
/// // Key 2 is the victim.
/// let (key, _) = cache.pop_lfu().unwrap();
/// assert_eq!(key, 2);
/// ```
pub trait LfuCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least frequently used entry.
    ///
    /// Among entries tied at the lowest frequency, the least recently
    /// touched one is removed. Returns `None` if the cache is empty.
    fn pop_lfu(&mut self) -> Option<(K, V)>;

    /// Peeks at the eviction victim without removing it.
    ///
    /// Returns `None` if the cache is empty. Does not change any
    /// frequency or recency state.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::policy::lfu::LfuCache;
    /// use lfukit::traits::{CoreCache, LfuCacheTrait};
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// cache.get(&2);
    ///
    /// // Peeking twice yields the same victim.
    /// assert_eq!(cache.peek_lfu().map(|(k, _)| *k), Some(1));
    /// assert_eq!(cache.peek_lfu().map(|(k, _)| *k), Some(1));
    /// ```
    fn peek_lfu(&self) -> Option<(&K, &V)>;

    /// Gets the access frequency for a key, without changing it.
    ///
    /// Returns `None` if the key is not present.
    fn frequency(&self, key: &K) -> Option<u64>;
}
