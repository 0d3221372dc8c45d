//! Concurrent load drivers for the store benchmarks.
//!
//! Keys are formatted once up front so the measured section is dominated by
//! lock traffic rather than string formatting.

use std::hint::black_box;
use std::sync::Barrier;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synckv::traits::Cache;

/// Pre-formatted `"{i}-key"` / `"{i}-value"` pairs.
pub struct KeySet {
    pub keys: Vec<String>,
    pub values: Vec<String>,
}

impl KeySet {
    pub fn new(n: usize) -> Self {
        Self {
            keys: (0..n).map(|i| format!("{i}-key")).collect(),
            values: (0..n).map(|i| format!("{i}-value")).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Balanced load: per key, one set, one get and one delete race from three
/// different threads. `workers` threads are spawned per role.
pub fn balanced<C>(cache: &C, keys: &KeySet, workers: usize)
where
    C: Cache + Sync + ?Sized,
{
    let barrier = Barrier::new(workers * 3);
    let barrier = &barrier;
    let n = keys.len();

    thread::scope(|s| {
        for worker in 0..workers {
            let stripe = move || (worker..n).step_by(workers);

            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    let _ = cache.set(keys.keys[i].clone(), keys.values[i].clone());
                }
            });
            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    let _ = black_box(cache.get(&keys.keys[i]));
                }
            });
            s.spawn(move || {
                barrier.wait();
                for i in stripe() {
                    let _ = cache.delete(&keys.keys[i]);
                }
            });
        }
    });
}

/// Mixed load over a pre-populated store: each thread performs `ops`
/// operations, a `read_ratio` fraction of them gets, the rest sets.
pub fn mixed<C>(cache: &C, keys: &KeySet, threads: usize, ops: usize, read_ratio: f64)
where
    C: Cache + Sync + ?Sized,
{
    let barrier = Barrier::new(threads);
    let barrier = &barrier;
    let n = keys.len();

    thread::scope(|s| {
        for t in 0..threads {
            s.spawn(move || {
                let mut rng = StdRng::seed_from_u64(0x5eed ^ t as u64);
                barrier.wait();
                for _ in 0..ops {
                    let i = rng.random_range(0..n);
                    if rng.random_bool(read_ratio) {
                        let _ = black_box(cache.get(&keys.keys[i]));
                    } else {
                        let _ = cache.set(keys.keys[i].clone(), keys.values[i].clone());
                    }
                }
            });
        }
    });
}

/// Fill `cache` with every key in `keys`.
pub fn populate<C>(cache: &C, keys: &KeySet)
where
    C: Cache + ?Sized,
{
    for (k, v) in keys.keys.iter().zip(&keys.values) {
        let _ = cache.set(k.clone(), v.clone());
    }
}
