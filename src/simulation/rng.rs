//! Random source construction.
//!
//! All randomness flows from a single [`ChaCha12Rng`] owned by the world, so
//! a fixed seed reproduces exact trajectories.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Creates the world RNG: deterministic when `seed` is given, otherwise
/// seeded from OS entropy.
pub fn create_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}
