pub use crate::builder::LfuCacheBuilder;
pub use crate::ds::{SlotId, SlotPool};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::LfuMetricsSnapshot;
pub use crate::policy::lfu::LfuCache;
pub use crate::traits::{CoreCache, LfuCacheTrait, MutableCache};
