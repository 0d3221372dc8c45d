//! Exclusive-lock store with an advisory entry counter.
//!
//! ## Architecture
//! - Same locking discipline as [`MutexStore`](crate::store::mutex::MutexStore):
//!   one `parking_lot::Mutex` held for the full duration of `set`, `get`
//!   and `delete`.
//! - An `AtomicI64` counter is updated while that lock is held:
//!   `+1` on every `set`, `-1` on every `delete`.
//! - [`Metrics::total_amount`] loads the counter with `Ordering::Relaxed`
//!   and never touches the lock.
//!
//! ## Counter Semantics
//!
//! ```text
//!   set("a")  set("a")  delete("a")  delete("a")
//!     +1        +1          -1           -1        → total = 0
//!   map size:   1   1        0            0
//! ```
//!
//! - Overwrites are counted as inserts.
//! - Deleting an absent key still decrements, so the value may go negative.
//! - A concurrent read may be stale relative to in-flight writes. Once all
//!   writers have finished and been joined, the value is exact.
//!
//! ## Example Usage
//! ```rust
//! use synckv::store::metered::MeteredMutexStore;
//! use synckv::traits::{Cache, Metrics};
//!
//! let store: MeteredMutexStore = MeteredMutexStore::new();
//! store.set("1".into(), "one".into()).unwrap();
//! store.set("1".into(), "uno".into()).unwrap();
//! assert_eq!(store.total_amount(), 2);
//! assert_eq!(store.len(), 1);
//! ```
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::CacheError;
use crate::traits::{Cache, ConcurrentCache, Metrics};

/// Mutex-guarded store that tracks `set` minus `delete` calls.
#[derive(Debug)]
pub struct MeteredMutexStore<K = String, V = String, S = RandomState> {
    map: Mutex<HashMap<K, V, S>>,
    total: AtomicI64,
}

impl<K, V> MeteredMutexStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default hasher and a zero counter.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> Default for MeteredMutexStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MeteredMutexStore<K, V, S>
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
        debug!(store = "metered", capacity, "created store");
        Self {
            map: Mutex::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
            total: AtomicI64::new(0),
        }
    }

    /// True number of entries, read under the lock.
    ///
    /// Unlike [`Metrics::total_amount`], this reflects the map itself.
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Returns `true` when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }
}

impl<K, V, S> Cache<K, V> for MeteredMutexStore<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn set(&self, key: K, value: V) -> Result<(), CacheError> {
        let mut map = self.map.lock();
        map.insert(key, value);
        self.total.fetch_add(1, Ordering::Relaxed);
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
        let mut map = self.map.lock();
        map.remove(key);
        self.total.fetch_sub(1, Ordering::Relaxed);
        Ok(())
    }
}

impl<K, V, S> Metrics for MeteredMutexStore<K, V, S> {
    /// Lock-free, possibly stale read of the counter.
    fn total_amount(&self) -> i64 {
        self.total.load(Ordering::Relaxed)
    }
}

impl<K, V, S> ConcurrentCache for MeteredMutexStore<K, V, S>
where
    K: Send,
    V: Send,
    S: Send,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CacheWithMetrics;

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn stored_value_is_returned() {
        let store: MeteredMutexStore = MeteredMutexStore::new();
        store.set(key("1"), "one".into()).unwrap();
        assert_eq!(store.get(&key("1")), Ok("one".to_string()));
        assert_eq!(store.total_amount(), 1);
    }

    #[test]
    fn fresh_store_counts_zero() {
        let store: MeteredMutexStore = MeteredMutexStore::new();
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.get(&key("missing")), Err(CacheError::NotFoundByKey));
        assert_eq!(store.total_amount(), 0);
    }

    #[test]
    fn overwrite_is_counted_twice() {
        let store: MeteredMutexStore = MeteredMutexStore::new();
        store.set(key("1"), "one".into()).unwrap();
        store.set(key("1"), "uno".into()).unwrap();
        assert_eq!(store.get(&key("1")), Ok("uno".to_string()));
        assert_eq!(store.total_amount(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_of_absent_key_goes_negative() {
        let store: MeteredMutexStore = MeteredMutexStore::new();
        assert_eq!(store.delete(&key("missing")), Ok(()));
        assert_eq!(store.total_amount(), -1);
        assert!(store.is_empty());
    }

    #[test]
    fn counter_is_sets_minus_deletes() {
        let store: MeteredMutexStore<u32, u32> = MeteredMutexStore::new();
        for i in 0..10 {
            store.set(i, i).unwrap();
        }
        for i in 0..4 {
            store.delete(&i).unwrap();
        }
        assert_eq!(store.total_amount(), 6);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Box<dyn CacheWithMetrics> = Box::new(MeteredMutexStore::<String, String>::new());
        store.set(key("a"), "b".into()).unwrap();
        assert_eq!(store.get(&key("a")), Ok("b".to_string()));
        assert_eq!(store.total_amount(), 1);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_concurrent<T: ConcurrentCache>() {}
        assert_concurrent::<MeteredMutexStore>();
    }
}
