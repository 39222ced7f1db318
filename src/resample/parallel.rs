use rayon::prelude::*;

use crate::rng::{self, DefaultRng};
use crate::{Distribution, Observation};

/// Runs `rounds` independent rounds across the rayon pool.
///
/// Round `i` gets a generator seeded with `counter_rng_seed(base_seed, i)`, so
/// the outcome does not depend on scheduling. Replicates are collected first
/// and sorted once.
pub(crate) fn replicates<T, F>(rounds: usize, base_seed: u64, round: F) -> Distribution<T>
where
    T: Observation,
    F: Fn(&mut DefaultRng) -> T + Sync,
{
    let replicates: Vec<T> = (0..rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = rng::seeded(rng::counter_rng_seed(base_seed, i as u64));
            round(&mut rng)
        })
        .collect();

    Distribution::from_replicates(replicates)
}
