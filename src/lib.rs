//! synckv: an in-process key-value store in four locking disciplines.
//!
//! | Store                                   | Synchronization               |
//! |-----------------------------------------|-------------------------------|
//! | [`UnsyncStore`](store::UnsyncStore)     | none (`!Sync`, strict delete) |
//! | [`MutexStore`](store::MutexStore)       | one exclusive lock            |
//! | [`RwLockStore`](store::RwLockStore)     | shared reads, exclusive writes|
//! | `MeteredMutexStore`                     | exclusive lock + counter      |
//!
//! All of them implement [`Cache`](traits::Cache); the metered store also
//! implements [`Metrics`](traits::Metrics). See `benches/balance_load.rs`
//! for the comparison under concurrent set/get/delete traffic.

pub mod builder;
pub mod error;
pub mod prelude;
pub mod store;
pub mod traits;

pub use crate::error::CacheError;
