//! Load emulation shared by the integration tests.
//!
//! Each key `i` gets three racing operations from three different threads:
//! a setter, a getter and a deleter. Keys are striped across `WORKERS`
//! threads per role so the three operations on one key run concurrently.

#![allow(dead_code)]

use std::sync::Barrier;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::thread;

use synckv::error::CacheError;
use synckv::traits::{Cache, CacheWithMetrics};

pub const WORKERS: usize = 4;

pub fn key(i: usize) -> String {
    format!("{i}-key")
}

pub fn value(i: usize) -> String {
    format!("{i}-value")
}

/// Outcome counts from one [`emulate_load`] run.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub sets: u64,
    pub deletes: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Run `parallel_factor` set/get/delete triplets against `cache`.
///
/// Panics (failing the test) if a set or delete errors, or if a successful
/// get returns a value other than the one written for that key.
pub fn emulate_load<C>(cache: &C, parallel_factor: usize) -> LoadReport
where
    C: Cache + Sync + ?Sized,
{
    let sets = AtomicU64::new(0);
    let deletes = AtomicU64::new(0);
    let hits = AtomicU64::new(0);
    let misses = AtomicU64::new(0);
    let barrier = Barrier::new(WORKERS * 3);
    let (sets_ref, deletes_ref, hits_ref, misses_ref) = (&sets, &deletes, &hits, &misses);
    let barrier = &barrier;

    thread::scope(|s| {
        for worker in 0..WORKERS {
            let stripe = move || (worker..parallel_factor).step_by(WORKERS);

            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    cache.set(key(i), value(i)).expect("set never fails");
                    sets_ref.fetch_add(1, Ordering::Relaxed);
                }
            });

            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    match cache.get(&key(i)) {
                        Ok(stored) => {
                            assert_eq!(stored, value(i), "torn or foreign value for key {i}");
                            hits_ref.fetch_add(1, Ordering::Relaxed);
                        },
                        Err(CacheError::NotFoundByKey) => {
                            misses_ref.fetch_add(1, Ordering::Relaxed);
                        },
                    }
                }
            });

            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    cache.delete(&key(i)).expect("delete is idempotent");
                    deletes_ref.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    LoadReport {
        sets: sets.into_inner(),
        deletes: deletes.into_inner(),
        hits: hits.into_inner(),
        misses: misses.into_inner(),
    }
}

/// Run [`emulate_load`] while sampler threads read the counter.
///
/// Returns the report plus the smallest and largest sampled values.
pub fn emulate_load_with_metrics<C>(cache: &C, parallel_factor: usize) -> (LoadReport, i64, i64)
where
    C: CacheWithMetrics + Sync + ?Sized,
{
    let min = AtomicI64::new(i64::MAX);
    let max = AtomicI64::new(i64::MIN);
    let done = AtomicBool::new(false);

    let report = thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                loop {
                    let total = cache.total_amount();
                    min.fetch_min(total, Ordering::Relaxed);
                    max.fetch_max(total, Ordering::Relaxed);
                    if done.load(Ordering::Acquire) {
                        break;
                    }
                    thread::yield_now();
                }
            });
        }

        let report = emulate_load(cache, parallel_factor);
        done.store(true, Ordering::Release);
        report
    });

    (report, min.into_inner(), max.into_inner())
}
