//! Exclusive-lock store.
//!
//! ## Architecture
//! - One `parking_lot::Mutex` guards a `HashMap<K, V, S>`.
//! - `set`, `get` and `delete` all hold the lock for their full duration, so
//!   at most one operation touches the map at any instant.
//!
//! ## Guarantees
//! - All three operations are linearizable in lock-acquisition order.
//! - Acquisition order is unspecified; `parking_lot` does not promise
//!   fairness under contention.
//! - Locks never poison: a panicking caller does not break later calls.
//!
//! ## Example Usage
//! ```rust
//! use synckv::store::mutex::MutexStore;
//! use synckv::traits::Cache;
//!
//! let store: MutexStore = MutexStore::new();
//! store.set("1".into(), "one".into()).unwrap();
//! assert_eq!(store.get(&"1".into()).unwrap(), "one");
//! store.delete(&"1".into()).unwrap();
//! store.delete(&"1".into()).unwrap(); // absent key is a no-op
//! ```
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::CacheError;
use crate::traits::{Cache, ConcurrentCache};

/// Thread-safe store serializing every operation through one mutex.
#[derive(Debug)]
pub struct MutexStore<K = String, V = String, S = RandomState> {
    map: Mutex<HashMap<K, V, S>>,
}

impl<K, V> MutexStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default hasher.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` entries before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> Default for MutexStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MutexStore<K, V, S>
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
        debug!(store = "mutex", capacity, "created store");
        Self {
            map: Mutex::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Number of entries, read under the lock.
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Returns `true` when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }
}

impl<K, V, S> Cache<K, V> for MutexStore<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn set(&self, key: K, value: V) -> Result<(), CacheError> {
        self.map.lock().insert(key, value);
        Ok(())
    }

    fn get(&self, key: &K) -> Result<V, CacheError> {
        self.map
            .lock()
            .get(key)
            .cloned()
            .ok_or(CacheError::NotFoundByKey)
    }

    fn delete(&self, key: &K) -> Result<(), CacheError> {
        self.map.lock().remove(key);
        Ok(())
    }
}

impl<K, V, S> ConcurrentCache for MutexStore<K, V, S>
where
    K: Send,
    V: Send,
    S: Send,
{
}
