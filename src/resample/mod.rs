mod basic;
#[cfg(feature = "rayon")]
mod parallel;
mod pool;
mod presampled;

pub use basic::BasicResampler;
pub use pool::IndexPool;
pub use presampled::PresampledResampler;

use rand::{Rng, SeedableRng};

use crate::config::{ResamplerConfig, Strategy};
use crate::error::Result;
use crate::rng::{self, DEFAULT_SEED, DefaultRng};
use crate::{Aggregator, Distribution, Interval, Observation};

/// A bootstrap resampling strategy.
///
/// `resample` rebuilds the replicate distribution from scratch; queries only
/// read it. Querying before the first run, or after [`reset`](Self::reset),
/// yields NaN.
pub trait Resample<T: Observation> {
    /// Runs every round over `data` and replaces the distribution.
    fn resample(&mut self, data: &[T]);

    /// Replicates from the latest run, sorted.
    fn distribution(&self) -> &Distribution<T>;

    /// Empties the distribution. Configuration and random state are kept.
    fn reset(&mut self);

    /// Nearest-rank quantile of the replicates.
    fn quantile(&self, q: f64) -> Result<T> {
        self.distribution().quantile(q)
    }

    /// Percentile confidence interval of the replicates.
    fn interval(&self, confidence: f64) -> Result<Interval<T>> {
        self.distribution().interval(confidence)
    }
}

/// Either resampling strategy, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Resampler<T, R = DefaultRng> {
    /// Fresh indices every round.
    Basic(BasicResampler<T, R>),
    /// Rounds pick from a cached index pool.
    Presampled(PresampledResampler<T, R>),
}

impl<T: Observation> Resampler<T> {
    /// Builds the resampler described by `config`.
    ///
    /// Without a configured seed the random source starts from [`DEFAULT_SEED`].
    pub fn from_config(config: &ResamplerConfig) -> Result<Self> {
        let rng = rng::seeded(config.seed.unwrap_or(DEFAULT_SEED));

        Ok(match config.strategy {
            Strategy::Basic => {
                Self::Basic(BasicResampler::with_rng(config.aggregator, config.rounds, rng))
            }
            Strategy::Presampled { pool_size } => Self::Presampled(PresampledResampler::with_rng(
                config.aggregator,
                config.rounds,
                pool_size,
                rng,
            )?),
        })
    }
}

impl<T: Observation, R: Rng> Resampler<T, R> {
    /// Parallel counterpart of [`resample`](Resample::resample).
    #[cfg(feature = "rayon")]
    pub fn par_resample(&mut self, data: &[T]) {
        match self {
            Self::Basic(inner) => inner.par_resample(data),
            Self::Presampled(inner) => inner.par_resample(data),
        }
    }
}

impl<T, R> Resampler<T, R> {
    /// The aggregator applied to every round.
    pub const fn aggregator(&self) -> Aggregator {
        match self {
            Self::Basic(inner) => inner.aggregator(),
            Self::Presampled(inner) => inner.aggregator(),
        }
    }

    /// Number of replicates produced per run.
    pub const fn rounds(&self) -> usize {
        match self {
            Self::Basic(inner) => inner.rounds(),
            Self::Presampled(inner) => inner.rounds(),
        }
    }
}

impl<T, R: SeedableRng> Resampler<T, R> {
    /// Reseeds the owned random source.
    pub fn seed(&mut self, seed: u64) {
        match self {
            Self::Basic(inner) => inner.seed(seed),
            Self::Presampled(inner) => inner.seed(seed),
        }
    }
}

impl<T: Observation, R: Rng> Resample<T> for Resampler<T, R> {
    fn resample(&mut self, data: &[T]) {
        match self {
            Self::Basic(inner) => inner.resample(data),
            Self::Presampled(inner) => inner.resample(data),
        }
    }

    fn distribution(&self) -> &Distribution<T> {
        match self {
            Self::Basic(inner) => inner.distribution(),
            Self::Presampled(inner) => inner.distribution(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Basic(inner) => inner.reset(),
            Self::Presampled(inner) => inner.reset(),
        }
    }
}

impl<T, R> From<BasicResampler<T, R>> for Resampler<T, R> {
    fn from(inner: BasicResampler<T, R>) -> Self {
        Self::Basic(inner)
    }
}

impl<T, R> From<PresampledResampler<T, R>> for Resampler<T, R> {
    fn from(inner: PresampledResampler<T, R>) -> Self {
        Self::Presampled(inner)
    }
}
