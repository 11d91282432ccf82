//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator used by the stochastic runners.
///
/// The same seed always yields the same stream, which is what makes
/// seeded runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeds from `seed` when given, otherwise from OS entropy.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}
