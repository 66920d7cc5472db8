//! Builder-style construction for [`LfuCache`].
//!
//! Covers the two construction-time knobs: capacity and the key-hashing
//! strategy. Validation lives in [`try_build`](LfuCacheBuilder::try_build);
//! [`build`](LfuCacheBuilder::build) panics on the same conditions for
//! callers with statically known-good parameters.
//!
//! ## Example
//!
//! ```
//! use lfukit::builder::LfuCacheBuilder;
//! use lfukit::traits::CoreCache;
//!
//! let mut cache = LfuCacheBuilder::new(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::error::ConfigError;
use crate::policy::lfu::LfuCache;

/// Builder for [`LfuCache`] instances.
#[derive(Debug, Clone)]
pub struct LfuCacheBuilder<S = FxBuildHasher> {
    capacity: usize,
    hasher: S,
}

impl LfuCacheBuilder {
    /// Creates a builder for a cache of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            hasher: FxBuildHasher,
        }
    }
}

impl<S> LfuCacheBuilder<S>
where
    S: BuildHasher,
{
    /// Replaces the key-hashing strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    ///
    /// use lfukit::builder::LfuCacheBuilder;
    /// use lfukit::traits::CoreCache;
    ///
    /// let mut cache = LfuCacheBuilder::new(8)
    ///     .hasher(RandomState::new())
    ///     .build::<String, u32>();
    /// cache.insert("a".to_string(), 1);
    /// assert!(cache.contains(&"a".to_string()));
    /// ```
    pub fn hasher<S2>(self, hasher: S2) -> LfuCacheBuilder<S2>
    where
        S2: BuildHasher,
    {
        LfuCacheBuilder {
            capacity: self.capacity,
            hasher,
        }
    }

    /// Builds the cache, rejecting invalid configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use lfukit::builder::LfuCacheBuilder;
    ///
    /// let err = LfuCacheBuilder::new(0).try_build::<u64, u64>().unwrap_err();
    /// assert!(err.to_string().contains("capacity"));
    /// ```
    pub fn try_build<K, V>(self) -> Result<LfuCache<K, V, S>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        LfuCache::try_with_hasher(self.capacity, self.hasher)
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero.
    pub fn build<K, V>(self) -> LfuCache<K, V, S>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build()
            .unwrap_or_else(|err| panic!("invalid cache configuration: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CoreCache;

    #[test]
    fn builder_produces_working_cache() {
        let mut cache = LfuCacheBuilder::new(2).build::<u32, &str>();
        assert_eq!(cache.capacity(), 2);
        cache.insert(1, "one");
        cache.insert(2, "two");
        cache.insert(3, "three");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(LfuCacheBuilder::new(0).try_build::<u32, u32>().is_err());
    }

    #[test]
    #[should_panic(expected = "invalid cache configuration")]
    fn build_panics_on_zero_capacity() {
        let _ = LfuCacheBuilder::new(0).build::<u32, u32>();
    }

    #[test]
    fn custom_hasher_round_trips() {
        use std::collections::hash_map::RandomState;

        let mut cache = LfuCacheBuilder::new(4)
            .hasher(RandomState::new())
            .build::<String, u32>();
        cache.insert("k".to_string(), 7);
        assert_eq!(cache.get(&"k".to_string()), Some(&7));
    }
}
