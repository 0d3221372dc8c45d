//! Store variants.
//!
//! Each variant owns its own map and lock; nothing is shared between
//! instances.
//!
//! | Store               | Lock                 | `delete` on absent key | `Sync` |
//! |---------------------|----------------------|------------------------|--------|
//! | `UnsyncStore`       | none                 | `NotFoundByKey`        | no     |
//! | `MutexStore`        | `Mutex`              | `Ok(())`               | yes    |
//! | `RwLockStore`       | `RwLock`             | `Ok(())`               | yes    |
//! | `MeteredMutexStore` | `Mutex` + counter    | `Ok(())`               | yes    |

#[cfg(feature = "metrics")]
pub mod metered;
pub mod mutex;
pub mod rwlock;
pub mod unsync;

#[cfg(feature = "metrics")]
pub use metered::MeteredMutexStore;
pub use mutex::MutexStore;
pub use rwlock::RwLockStore;
pub use unsync::UnsyncStore;
