//! # Store Contracts
//!
//! Every store variant implements one capability set, [`Cache`]. Variants
//! differ only in how they synchronize access to the underlying map, so
//! callers pick a variant by constructing it (or via
//! [`StoreBuilder`](crate::builder::StoreBuilder)) and then program against
//! the trait.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌──────────────────────────────────────┐
//!                  │            Cache<K, V>               │
//!                  │                                      │
//!                  │  set(&, K, V)   → Result<()>         │
//!                  │  get(&, &K)     → Result<V>          │
//!                  │  delete(&, &K)  → Result<()>         │
//!                  └──────────────────┬───────────────────┘
//!                                     │
//!        ┌───────────────┬────────────┼───────────────┬─────────────────┐
//!        ▼               ▼            ▼               ▼                 │
//!  ┌───────────┐  ┌────────────┐ ┌─────────────┐ ┌──────────────────┐   │
//!  │UnsyncStore│  │ MutexStore │ │ RwLockStore │ │MeteredMutexStore │◄──┘
//!  │ (!Sync)   │  │            │ │             │ │  + Metrics       │
//!  └───────────┘  └─────┬──────┘ └──────┬──────┘ └────────┬─────────┘
//!                       └───────────────┼─────────────────┘
//!                                       ▼
//!                             ConcurrentCache marker
//!                              (Send + Sync)
//! ```
//!
//! ## Trait Summary
//!
//! | Trait              | Extends            | Purpose                              |
//! |--------------------|--------------------|--------------------------------------|
//! | `Cache`            | -                  | Set/Get/Delete over `&self`          |
//! | `Metrics`          | -                  | Advisory entry counter               |
//! | `CacheWithMetrics` | `Cache + Metrics`  | Blanket combination for trait objects|
//! | `ConcurrentCache`  | `Send + Sync`      | Marker for internally locked stores  |
//!
//! ## Error Semantics
//!
//! | Operation | Absent key                                   |
//! |-----------|----------------------------------------------|
//! | `set`     | never fails                                  |
//! | `get`     | `NotFoundByKey` on every store               |
//! | `delete`  | `Ok(())`, except `UnsyncStore` (`NotFoundByKey`) |
//!
//! ## Thread Safety
//!
//! All methods take `&self`. Locking stores are `Send + Sync` and are shared
//! behind `Arc`. [`UnsyncStore`](crate::store::unsync::UnsyncStore) keeps its
//! map in a `RefCell`, so it is `Send` but not `Sync`; sharing it requires
//! external synchronization by the caller.

use crate::error::CacheError;

/// Key-value operations shared by every store variant.
///
/// Object safe: `Box<dyn Cache>` and `Arc<dyn Cache + Send + Sync>` are the
/// usual forms when the variant is chosen at runtime.
///
/// # Example
///
/// ```
/// use synckv::error::CacheError;
/// use synckv::store::rwlock::RwLockStore;
/// use synckv::traits::Cache;
///
/// fn roundtrip(cache: &dyn Cache) -> Result<String, CacheError> {
///     cache.set("1".to_string(), "one".to_string())?;
///     cache.get(&"1".to_string())
/// }
///
/// let store: RwLockStore = RwLockStore::new();
/// assert_eq!(roundtrip(&store).as_deref(), Ok("one"));
/// ```
pub trait Cache<K = String, V = String> {
    /// Insert or overwrite the value stored under `key`.
    fn set(&self, key: K, value: V) -> Result<(), CacheError>;

    /// Return a copy of the value stored under `key`.
    ///
    /// Fails with [`CacheError::NotFoundByKey`] when the key is absent.
    fn get(&self, key: &K) -> Result<V, CacheError>;

    /// Remove `key`.
    ///
    /// Idempotent on locking stores. The strict
    /// [`UnsyncStore`](crate::store::unsync::UnsyncStore) reports an absent
    /// key as [`CacheError::NotFoundByKey`].
    fn delete(&self, key: &K) -> Result<(), CacheError>;
}

/// Advisory entry counter.
///
/// The value is `set` calls minus `delete` calls since creation. It is not
/// clamped to the map size: overwrites count twice and deleting an absent
/// key still decrements, so it can go negative. Reads are not ordered with
/// concurrent writes and may be stale.
pub trait Metrics {
    /// Current counter value.
    fn total_amount(&self) -> i64;
}

/// A [`Cache`] that also exposes [`Metrics`].
pub trait CacheWithMetrics<K = String, V = String>: Cache<K, V> + Metrics {}

impl<T, K, V> CacheWithMetrics<K, V> for T where T: Cache<K, V> + Metrics + ?Sized {}

/// Marker for stores that synchronize internally and may be shared across
/// threads without external locking.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use synckv::store::mutex::MutexStore;
/// use synckv::traits::{Cache, ConcurrentCache};
///
/// fn share<C: Cache + ConcurrentCache + 'static>(cache: C) {
///     let cache = Arc::new(cache);
///     let writer = {
///         let cache = Arc::clone(&cache);
///         thread::spawn(move || cache.set("k".into(), "v".into()))
///     };
///     writer.join().unwrap().unwrap();
///     assert_eq!(cache.get(&"k".to_string()).unwrap(), "v");
/// }
///
/// share(MutexStore::<String, String>::new());
/// ```
pub trait ConcurrentCache: Send + Sync {}
