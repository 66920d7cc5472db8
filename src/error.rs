//! Error types for the lfukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (the only invalid configuration is a zero capacity).
//! - [`InvariantError`]: Returned when an internal-consistency probe finds
//!   a violated invariant (test/debug-only `check_invariants`).
//!
//! Cache misses are never errors; the lookup API reports them through its
//! return type. Invariant breakage on a hot path panics instead of
//! returning an error, since it signals a programming bug rather than a
//! condition a caller could handle.
//!
//! ## Example Usage
//!
//! ```
//! use lfukit::error::ConfigError;
//! use lfukit::policy::lfu::LfuCache;
//!
//! let cache: Result<LfuCache<u64, String>, ConfigError> = LfuCache::try_new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is rejected without panicking.
//! let bad = LfuCache::<u64, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by the fallible constructors
/// ([`LfuCache::try_new`](crate::policy::lfu::LfuCache::try_new),
/// [`LfuCache::try_with_hasher`](crate::policy::lfu::LfuCache::try_with_hasher))
/// and by [`LfuCacheBuilder::try_build`](crate::builder::LfuCacheBuilder::try_build).
/// Carries a human-readable description of the rejected parameter.
///
/// # Example
///
/// ```
/// use lfukit::policy::lfu::LfuCache;
///
/// let err = LfuCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal cache invariant is violated.
///
/// Produced by the test/debug-only `check_invariants` probe on
/// [`LfuCache`](crate::policy::lfu::LfuCache).
/// A correct build never produces this; it exists so that property
/// tests and fuzzers can validate the full structure after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
