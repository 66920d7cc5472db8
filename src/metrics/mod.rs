//! Operation counters for the cache, compiled in with the `metrics` feature.
//!
//! Counters are plain integers bumped inline on each operation; read-path
//! accessors that take `&self` use [`MetricsCell`] for interior mutability.
//! [`LfuMetricsSnapshot`] is the owned view handed to callers.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;

pub use cell::MetricsCell;
pub use metrics_impl::LfuMetrics;
pub use snapshot::LfuMetricsSnapshot;
