use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng};

use super::{IndexPool, Resample};
use crate::error::{Error, Result};
use crate::rng::{self, DEFAULT_SEED, DefaultRng};
use crate::{Aggregator, Distribution, Observation};

/// Bootstrap over a cached pool of index sets.
///
/// Each run first draws `pool_size` index sets of length `n`, then every round
/// picks one pool entry uniformly at random, with replacement across rounds.
/// Random draws drop from `R·n` to `pool_size·n + R`.
///
/// Rounds that pick the same entry produce identical replicates, so the
/// distribution holds at most `pool_size` distinct values. Keep `pool_size`
/// comparable to `rounds` when correlation between replicates matters.
///
/// The pool is regenerated on every [`resample`](Resample::resample) and kept
/// afterwards for inspection.
#[derive(Debug, Clone)]
pub struct PresampledResampler<T, R = DefaultRng> {
    aggregator: Aggregator,
    rounds: usize,
    pool_size: NonZeroUsize,
    rng: R,
    pool: IndexPool,
    distribution: Distribution<T>,
    buffer: Vec<T>,
}

impl<T: Observation> PresampledResampler<T> {
    /// Resampler seeded with [`DEFAULT_SEED`].
    ///
    /// Fails with [`Error::EmptyPool`] when `pool_size` is zero.
    pub fn new(aggregator: Aggregator, rounds: usize, pool_size: usize) -> Result<Self> {
        Self::with_rng(aggregator, rounds, pool_size, rng::seeded(DEFAULT_SEED))
    }
}

impl<T: Observation, R: Rng> PresampledResampler<T, R> {
    /// Resampler drawing from an injected random source.
    pub fn with_rng(aggregator: Aggregator, rounds: usize, pool_size: usize, rng: R) -> Result<Self> {
        let pool_size = NonZeroUsize::new(pool_size).ok_or(Error::EmptyPool)?;

        Ok(Self {
            aggregator,
            rounds,
            pool_size,
            rng,
            pool: IndexPool::default(),
            distribution: Distribution::new(),
            buffer: Vec::new(),
        })
    }

    /// Builds the pool from the owned source, then selects and aggregates
    /// entries for every round on its own derived generator across the rayon
    /// pool.
    #[cfg(feature = "rayon")]
    pub fn par_resample(&mut self, data: &[T]) {
        let n = data.len();
        let aggregator = self.aggregator;
        let pool = IndexPool::generate(self.pool_size.get(), n, &mut self.rng);
        let base_seed = self.rng.next_u64();

        self.distribution = super::parallel::replicates(self.rounds, base_seed, |rng| {
            let sample: Vec<T> = pool.choose(rng).iter().map(|&i| data[i]).collect();
            aggregator.aggregate(&sample)
        });
        self.pool = pool;

        tracing::debug!(
            strategy = "presampled",
            parallel = true,
            aggregator = %self.aggregator,
            rounds = self.rounds,
            pool_size = self.pool_size.get(),
            n,
            "resampled"
        );
    }
}

impl<T, R> PresampledResampler<T, R> {
    /// The aggregator applied to every round.
    #[inline]
    pub const fn aggregator(&self) -> Aggregator {
        self.aggregator
    }

    /// Number of replicates produced per run.
    #[inline]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of index sets generated per run.
    #[inline]
    pub const fn pool_size(&self) -> usize {
        self.pool_size.get()
    }

    /// Pool generated by the latest run (empty before the first one).
    #[inline]
    pub fn pool(&self) -> &IndexPool {
        &self.pool
    }
}

impl<T, R: SeedableRng> PresampledResampler<T, R> {
    /// Reseeds the owned random source.
    pub fn seed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }

    /// Builder form of [`seed`](Self::seed).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed(seed);
        self
    }
}

impl<T: Observation, R: Rng> Resample<T> for PresampledResampler<T, R> {
    fn resample(&mut self, data: &[T]) {
        let n = data.len();
        let pool = IndexPool::generate(self.pool_size.get(), n, &mut self.rng);
        self.distribution.restart(self.rounds);

        for _ in 0..self.rounds {
            let entry = pool.choose(&mut self.rng);
            self.buffer.clear();
            self.buffer.extend(entry.iter().map(|&i| data[i]));
            self.distribution
                .push(self.aggregator.aggregate(&self.buffer));
        }
        self.distribution.finish();
        self.pool = pool;

        tracing::debug!(
            strategy = "presampled",
            aggregator = %self.aggregator,
            rounds = self.rounds,
            pool_size = self.pool_size.get(),
            n,
            "resampled"
        );
    }

    #[inline]
    fn distribution(&self) -> &Distribution<T> {
        &self.distribution
    }

    fn reset(&mut self) {
        self.distribution.clear();
        tracing::debug!(strategy = "presampled", "reset");
    }
}
