//! Correlation ids.
//!
//! Every call draws a fresh id from the client's [`IdGenerator`]. Ids are
//! best-effort unique: [`RandomIds`] makes collisions between in-flight calls
//! unlikely, [`SequentialIds`] makes them impossible within one generator and
//! gives tests predictable values.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of correlation ids, shared by all calls made through one client.
///
/// Implementations must be safe to call from concurrent tasks.
pub trait IdGenerator: Send + Sync {
    /// Returns the id for the next request.
    fn next_id(&self) -> u64;
}

/// Pseudo-random ids in `0..2^63`, drawn from a ChaCha20 stream.
///
/// Ids stay below `2^63` so daemons that parse ids as signed 64-bit integers
/// echo them back unchanged.
#[derive(Debug)]
pub struct RandomIds {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomIds {
    /// Creates a generator seeded from the thread-local OS-backed RNG.
    pub fn new() -> Self { Self { rng: Mutex::new(ChaCha20Rng::from_rng(&mut rand::rng())) } }

    /// Creates a generator with a fixed seed; the id sequence is reproducible.
    pub fn seeded(seed: u64) -> Self { Self { rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)) } }
}

impl Default for RandomIds {
    fn default() -> Self { Self::new() }
}

impl IdGenerator for RandomIds {
    fn next_id(&self) -> u64 {
        // A poisoned lock still holds a usable RNG state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random::<u64>() >> 1
    }
}

/// Monotonically increasing ids starting at a chosen value.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator whose first id is `start`.
    pub fn starting_at(start: u64) -> Self { Self { next: AtomicU64::new(start) } }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 { self.next.fetch_add(1, Ordering::Relaxed) }
}
