/// Owned snapshot of [`LfuMetrics`](crate::metrics::LfuMetrics) counters.
///
/// Taken via
/// [`LfuCache::metrics_snapshot`](crate::policy::lfu::LfuCache::metrics_snapshot);
/// the snapshot also carries the cache's length and capacity at the time it
/// was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LfuMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub pop_lfu_calls: u64,
    pub pop_lfu_found: u64,
    pub peek_lfu_calls: u64,
    pub peek_lfu_found: u64,
    pub frequency_calls: u64,
    pub frequency_found: u64,
    pub cache_len: usize,
    pub capacity: usize,
}

impl LfuMetricsSnapshot {
    /// Fraction of `get` calls that hit, in `[0.0, 1.0]`; 0.0 before any get.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
