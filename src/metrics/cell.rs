use std::cell::Cell;

/// Counter cell for read-path metrics.
///
/// Accessors like `peek_lfu` and `frequency` take `&self`, so their
/// counters need interior mutability. The cache has a single logical owner
/// by contract, which makes a plain [`Cell`] sufficient.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
