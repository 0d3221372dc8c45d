//! Unsynchronized store.
//!
//! The baseline for comparing locking disciplines. The map lives in a
//! `RefCell` with no lock around it, so the type is `Send` but not `Sync`:
//! it can move to another thread but cannot be shared between threads
//! without external synchronization.
//!
//! `delete` is strict here: removing an absent key returns
//! [`CacheError::NotFoundByKey`], whereas every locking store treats it as a
//! no-op.
//!
//! Sharing across threads does not compile:
//!
//! ```compile_fail
//! use std::sync::Arc;
//! use std::thread;
//!
//! use synckv::store::unsync::UnsyncStore;
//! use synckv::traits::Cache;
//!
//! let store = Arc::new(UnsyncStore::<String, String>::new());
//! let shared = Arc::clone(&store);
//! thread::spawn(move || shared.set("k".into(), "v".into()));
//! ```
//!
//! The caller has to provide the lock:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! use synckv::store::unsync::UnsyncStore;
//! use synckv::traits::Cache;
//!
//! let store = Arc::new(Mutex::new(UnsyncStore::<String, String>::new()));
//! let shared = Arc::clone(&store);
//! thread::spawn(move || shared.lock().unwrap().set("k".into(), "v".into()))
//!     .join()
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(store.lock().unwrap().get(&"k".into()).unwrap(), "v");
//! ```
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use tracing::{debug, trace};

use crate::error::CacheError;
use crate::traits::Cache;

/// Single-threaded store with strict delete semantics.
#[derive(Debug)]
pub struct UnsyncStore<K = String, V = String, S = RandomState> {
    map: RefCell<HashMap<K, V, S>>,
}

impl<K, V> UnsyncStore<K, V, RandomState>
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

impl<K, V> Default for UnsyncStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> UnsyncStore<K, V, S>
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
        debug!(store = "unsync", capacity, "created store");
        Self {
            map: RefCell::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    /// Returns `true` when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl<K, V, S> Cache<K, V> for UnsyncStore<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn set(&self, key: K, value: V) -> Result<(), CacheError> {
        self.map.borrow_mut().insert(key, value);
        Ok(())
    }

    fn get(&self, key: &K) -> Result<V, CacheError> {
        self.map
            .borrow()
            .get(key)
            .cloned()
            .ok_or(CacheError::NotFoundByKey)
    }

    /// Remove `key`, failing if it is absent.
    fn delete(&self, key: &K) -> Result<(), CacheError> {
        match self.map.borrow_mut().remove(key) {
            Some(_) => Ok(()),
            None => {
                trace!(store = "unsync", "delete of absent key rejected");
                Err(CacheError::NotFoundByKey)
            },
        }
    }
}
