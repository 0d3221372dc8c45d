//! Error types for the synckv library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by store operations. The only kind is
//!   [`CacheError::NotFoundByKey`], an ordinary outcome callers branch on.
//! - [`ConfigError`]: Returned when a store variant cannot be selected from
//!   configuration (e.g. an unknown [`StoreKind`](crate::builder::StoreKind)
//!   name).
//!
//! ## Example Usage
//!
//! ```
//! use synckv::error::CacheError;
//! use synckv::store::mutex::MutexStore;
//! use synckv::traits::Cache;
//!
//! let store: MutexStore = MutexStore::new();
//! match store.get(&"missing".to_string()) {
//!     Err(CacheError::NotFoundByKey) => {},
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by [`Cache`](crate::traits::Cache) operations.
///
/// `get` yields [`NotFoundByKey`](Self::NotFoundByKey) for an absent key on
/// every store. `delete` yields it only from the strict
/// [`UnsyncStore`](crate::store::unsync::UnsyncStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CacheError {
    /// No value is stored under the requested key.
    #[error("value not found")]
    NotFoundByKey,
}

impl CacheError {
    /// Returns `true` for [`CacheError::NotFoundByKey`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundByKey)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when store selection parameters are invalid.
///
/// # Example
///
/// ```
/// use synckv::builder::StoreKind;
///
/// let err = "spinlock".parse::<StoreKind>().unwrap_err();
/// assert!(err.to_string().contains("spinlock"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The name does not match any thread-safe store variant.
    #[error("unknown store kind `{0}` (expected one of: mutex, rwlock, metered)")]
    UnknownStoreKind(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
