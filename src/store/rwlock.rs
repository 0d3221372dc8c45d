//! Reader/writer-lock store.
//!
//! ## Architecture
//! - One `parking_lot::RwLock` guards a `HashMap<K, V, S>`.
//! - `get` takes the lock in shared mode; concurrent reads proceed in
//!   parallel.
//! - `set` and `delete` take it in exclusive mode and block all readers and
//!   writers.
//!
//! ## Guarantees
//! - A reader never observes a half-applied `set` or `delete`.
//! - Writers are serialized against each other and against readers.
//! - Reads are ordered only relative to writes, not to each other.
//!
//! ## Performance Trade-offs
//! - Outperforms [`MutexStore`](crate::store::mutex::MutexStore) on
//!   read-heavy load.
//! - Writers may starve under sustained read contention; this is accepted.
//!
//! ## Example Usage
//! ```rust
//! use synckv::store::rwlock::RwLockStore;
//! use synckv::traits::Cache;
//!
//! let store: RwLockStore = RwLockStore::new();
//! store.delete(&"missing".into()).unwrap();
//! assert!(store.get(&"missing".into()).is_err());
//! ```
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::CacheError;
use crate::traits::{Cache, ConcurrentCache};

/// Thread-safe store with shared reads and exclusive writes.
#[derive(Debug)]
pub struct RwLockStore<K = String, V = String, S = RandomState> {
    map: RwLock<HashMap<K, V, S>>,
}

impl<K, V> RwLockStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default hasher.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> Default for RwLockStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> RwLockStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create an empty store with a custom hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Create an empty store with a preallocation hint and a custom hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        debug!(store = "rwlock", capacity, "created store");
        Self {
            map: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Number of entries, read under the shared lock.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Returns `true` when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl<K, V, S> Cache<K, V> for RwLockStore<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn set(&self, key: K, value: V) -> Result<(), CacheError> {
        self.map.write().insert(key, value);
        Ok(())
    }

    fn get(&self, key: &K) -> Result<V, CacheError> {
        self.map
            .read()
            .get(key)
            .cloned()
            .ok_or(CacheError::NotFoundByKey)
    }

    fn delete(&self, key: &K) -> Result<(), CacheError> {
        self.map.write().remove(key);
        Ok(())
    }
}

impl<K, V, S> ConcurrentCache for RwLockStore<K, V, S>
where
    K: Send + Sync,
    V: Send + Sync,
    S: Send + Sync,
{
}
