//! Randomness and clock seams used by value generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Source of random values for generators.
pub trait RandomSource {
    /// Uniform integer in `[lower, upper]`, both ends inclusive.
    fn int_in_range(&mut self, lower: i64, upper: i64) -> i64;

    /// Random (version 4) UUID.
    fn uuid_v4(&mut self) -> Uuid;
}

/// Wall-clock seam for timestamp fields.
pub trait Clock {
    /// Seconds since the Unix epoch, with sub-second precision.
    fn now_epoch_seconds(&self) -> f64;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> f64 {
        chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// [`RandomSource`] over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Seeded from the thread-local OS-backed generator.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise from entropy.
    pub fn for_worker(seed: Option<u64>, worker: usize) -> Self {
        match seed {
            Some(seed) => Self::seeded(derive_worker_seed(seed, worker)),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, lower: i64, upper: i64) -> i64 {
        self.rng.random_range(lower..=upper)
    }

    fn uuid_v4(&mut self) -> Uuid {
        let mut bytes = [0_u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Per-worker seed so parallel workers never share a stream.
pub fn derive_worker_seed(seed: u64, worker: usize) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in (worker as u64).to_le_bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
