//! Random sources owned by resamplers.
//!
//! Every resampler carries its own generator; nothing here is process-wide, so
//! two resamplers running side by side never disturb each other's streams.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator used when the caller does not inject one.
///
/// Xoshiro256++ is fast and reproducible across platforms for a given seed.
/// It is not cryptographically secure, which resampling does not need.
pub type DefaultRng = Xoshiro256PlusPlus;

/// Seed used by resamplers constructed without an explicit one.
pub const DEFAULT_SEED: u64 = 0;

/// Creates a [`DefaultRng`] from a 64-bit seed.
#[inline]
pub fn seeded(seed: u64) -> DefaultRng {
    DefaultRng::seed_from_u64(seed)
}

/// Derives the seed of stream `counter` from `base_seed` (SplitMix64 finaliser).
///
/// Used to hand each parallel round an independent, reproducible generator.
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
