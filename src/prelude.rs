pub use crate::builder::{StoreBuilder, StoreKind};
pub use crate::error::{CacheError, ConfigError};
#[cfg(feature = "metrics")]
pub use crate::store::MeteredMutexStore;
pub use crate::store::{MutexStore, RwLockStore, UnsyncStore};
pub use crate::traits::{Cache, CacheWithMetrics, ConcurrentCache, Metrics};
