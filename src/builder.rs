//! Runtime selection of a store variant.
//!
//! Provides one entry point for callers (benchmark drivers, embedding
//! applications) that choose the locking discipline from configuration
//! instead of naming a concrete type.
//!
//! ## Example
//!
//! ```rust
//! use synckv::builder::{StoreBuilder, StoreKind};
//!
//! let cache = StoreBuilder::new()
//!     .capacity(64)
//!     .build::<String, String>(StoreKind::RwLock);
//! cache.set("1".into(), "one".into()).unwrap();
//! assert_eq!(cache.get(&"1".into()).unwrap(), "one");
//!
//! let kind: StoreKind = "mutex".parse().unwrap();
//! assert_eq!(kind, StoreKind::Mutex);
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::error::ConfigError;
#[cfg(feature = "metrics")]
use crate::store::metered::MeteredMutexStore;
use crate::store::mutex::MutexStore;
use crate::store::rwlock::RwLockStore;
use crate::store::unsync::UnsyncStore;
use crate::traits::Cache;
#[cfg(feature = "metrics")]
use crate::traits::CacheWithMetrics;

/// Thread-safe store variants selectable at runtime.
///
/// [`UnsyncStore`] is not listed: it cannot be shared across threads, so it
/// is built separately via [`StoreBuilder::build_unsync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Single exclusive lock for every operation.
    Mutex,
    /// Shared lock for reads, exclusive lock for writes.
    RwLock,
    /// Exclusive lock plus an advisory entry counter.
    #[cfg(feature = "metrics")]
    MeteredMutex,
}

impl StoreKind {
    /// Every selectable variant, in declaration order.
    #[cfg(feature = "metrics")]
    pub const ALL: &'static [StoreKind] =
        &[StoreKind::Mutex, StoreKind::RwLock, StoreKind::MeteredMutex];

    /// Every selectable variant, in declaration order.
    #[cfg(not(feature = "metrics"))]
    pub const ALL: &'static [StoreKind] = &[StoreKind::Mutex, StoreKind::RwLock];

    /// Canonical lowercase name, accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Mutex => "mutex",
            StoreKind::RwLock => "rwlock",
            #[cfg(feature = "metrics")]
            StoreKind::MeteredMutex => "metered",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    /// Parse a variant name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mutex" | "exclusive" => Ok(StoreKind::Mutex),
            "rwlock" | "rw" => Ok(StoreKind::RwLock),
            #[cfg(feature = "metrics")]
            "metered" | "mutex-metrics" => Ok(StoreKind::MeteredMutex),
            _ => Err(ConfigError::UnknownStoreKind(s.to_string())),
        }
    }
}

/// Builder for store instances.
///
/// `capacity` is a preallocation hint for the backing map, not a limit;
/// stores never evict.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreBuilder {
    capacity: usize,
}

impl StoreBuilder {
    /// Create a builder with no preallocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of entries to preallocate.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build a shareable store of the given kind.
    pub fn build<K, V>(self, kind: StoreKind) -> Arc<dyn Cache<K, V> + Send + Sync>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        debug!(%kind, capacity = self.capacity, "building store");
        match kind {
            StoreKind::Mutex => Arc::new(MutexStore::<K, V>::with_capacity(self.capacity)),
            StoreKind::RwLock => Arc::new(RwLockStore::<K, V>::with_capacity(self.capacity)),
            #[cfg(feature = "metrics")]
            StoreKind::MeteredMutex => {
                Arc::new(MeteredMutexStore::<K, V>::with_capacity(self.capacity))
            },
        }
    }

    /// Build a shareable store from a variant name such as `"rwlock"`.
    ///
    /// ```
    /// use synckv::builder::StoreBuilder;
    ///
    /// assert!(StoreBuilder::new().build_named::<u64, u64>("rw").is_ok());
    /// assert!(StoreBuilder::new().build_named::<u64, u64>("none").is_err());
    /// ```
    pub fn build_named<K, V>(
        self,
        name: &str,
    ) -> Result<Arc<dyn Cache<K, V> + Send + Sync>, ConfigError>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let kind = name.parse::<StoreKind>()?;
        Ok(self.build(kind))
    }

    /// Build the metered store behind its combined trait object.
    #[cfg(feature = "metrics")]
    pub fn build_metered<K, V>(self) -> Arc<dyn CacheWithMetrics<K, V> + Send + Sync>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        debug!(kind = "metered", capacity = self.capacity, "building store");
        Arc::new(MeteredMutexStore::<K, V>::with_capacity(self.capacity))
    }

    /// Build the single-threaded baseline store.
    pub fn build_unsync<K, V>(self) -> UnsyncStore<K, V>
    where
        K: Eq + Hash,
    {
        debug!(kind = "unsync", capacity = self.capacity, "building store");
        UnsyncStore::with_capacity(self.capacity)
    }
}
