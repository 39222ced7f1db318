use rand::{Rng, SeedableRng};

use super::Resample;
use crate::rng::{self, DEFAULT_SEED, DefaultRng};
use crate::{Aggregator, Distribution, Observation};

/// Classic bootstrap: every round draws `n` fresh indices with replacement.
///
/// Costs `R·n` random draws per run. Rounds are statistically independent.
#[derive(Debug, Clone)]
pub struct BasicResampler<T, R = DefaultRng> {
    aggregator: Aggregator,
    rounds: usize,
    rng: R,
    distribution: Distribution<T>,
    buffer: Vec<T>,
}

impl<T: Observation> BasicResampler<T> {
    /// Resampler running `rounds` rounds, seeded with [`DEFAULT_SEED`].
    pub fn new(aggregator: Aggregator, rounds: usize) -> Self {
        Self::with_rng(aggregator, rounds, rng::seeded(DEFAULT_SEED))
    }
}

impl<T: Observation, R: Rng> BasicResampler<T, R> {
    /// Resampler drawing from an injected random source.
    pub fn with_rng(aggregator: Aggregator, rounds: usize, rng: R) -> Self {
        Self {
            aggregator,
            rounds,
            rng,
            distribution: Distribution::new(),
            buffer: Vec::new(),
        }
    }

    /// Draws a base seed from the owned source and runs every round on its
    /// own derived generator across the rayon pool.
    ///
    /// Deterministic for a given seed, but a different stream than
    /// [`resample`](Resample::resample).
    #[cfg(feature = "rayon")]
    pub fn par_resample(&mut self, data: &[T]) {
        let n = data.len();
        let aggregator = self.aggregator;
        let base_seed = self.rng.next_u64();

        self.distribution = super::parallel::replicates(self.rounds, base_seed, |rng| {
            let sample: Vec<T> = (0..n).map(|_| data[rng.gen_range(0..n)]).collect();
            aggregator.aggregate(&sample)
        });

        tracing::debug!(
            strategy = "basic",
            parallel = true,
            aggregator = %self.aggregator,
            rounds = self.rounds,
            n,
            "resampled"
        );
    }
}

impl<T, R> BasicResampler<T, R> {
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
}

impl<T, R: SeedableRng> BasicResampler<T, R> {
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

impl<T: Observation, R: Rng> Resample<T> for BasicResampler<T, R> {
    fn resample(&mut self, data: &[T]) {
        let n = data.len();
        self.distribution.restart(self.rounds);

        for _ in 0..self.rounds {
            self.buffer.clear();
            self.buffer
                .extend((0..n).map(|_| data[self.rng.gen_range(0..n)]));
            self.distribution
                .push(self.aggregator.aggregate(&self.buffer));
        }
        self.distribution.finish();

        tracing::debug!(
            strategy = "basic",
            aggregator = %self.aggregator,
            rounds = self.rounds,
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
        tracing::debug!(strategy = "basic", "reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_abs_diff_eq;

    const SEED: u64 = 29_883_410;
    const DATA: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

    #[test]
    fn seeded_sum_bounds() {
        let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 2000);
        resampler.seed(SEED);
        resampler.resample(&DATA);

        assert_eq!(resampler.quantile(0.0).unwrap(), 0.0);
        assert_eq!(resampler.quantile(0.5).unwrap(), 10.0);
        assert_eq!(resampler.quantile(1.0).unwrap(), 20.0);

        resampler.reset();
        assert!(resampler.quantile(1.0).unwrap().is_nan());
    }

    #[test]
    fn one_replicate_per_round() {
        for rounds in [0, 1, 7, 500] {
            let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Average, rounds);
            resampler.resample(&DATA);
            assert_eq!(resampler.distribution().len(), rounds);

            // A second run rebuilds instead of appending.
            resampler.resample(&DATA[..2]);
            assert_eq!(resampler.distribution().len(), rounds);
        }
    }

    #[test]
    fn before_first_run_reads_nan() {
        let resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 10);
        assert!(resampler.quantile(0.5).unwrap().is_nan());
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut resampler: BasicResampler<f64> =
            BasicResampler::new(Aggregator::median(), 300).with_seed(SEED);
        resampler.resample(&DATA);
        resampler.reset();

        assert!(resampler.distribution().is_empty());
        assert_eq!(resampler.rounds(), 300);
        assert_eq!(resampler.aggregator(), Aggregator::median());
        for q in [0.0, 0.3, 1.0] {
            assert!(resampler.quantile(q).unwrap().is_nan());
        }

        resampler.resample(&DATA);
        assert_eq!(resampler.distribution().len(), 300);
    }

    #[test]
    fn empty_input_delegates_to_aggregator() {
        let mut sum: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 50);
        sum.resample(&[]);
        assert_eq!(sum.distribution().len(), 50);
        assert!(sum.distribution().iter().all(|&x| x == 0.0));

        let mut average: BasicResampler<f64> = BasicResampler::new(Aggregator::Average, 50);
        average.resample(&[]);
        assert_eq!(average.quantile(0.5).unwrap(), 0.0);

        let mut quantile: BasicResampler<f64> =
            BasicResampler::new(Aggregator::quantile(0.9).unwrap(), 50);
        quantile.resample(&[]);
        assert_eq!(quantile.distribution().len(), 50);
        assert!(quantile.distribution().iter().all(|x| x.is_nan()));
        assert!(quantile.quantile(0.0).unwrap().is_nan());
    }

    #[test]
    fn same_seed_reproduces_distribution() {
        let data: Vec<f64> = (0..50).map(f64::from).collect();
        let run = |seed| {
            let mut resampler: BasicResampler<f64> =
                BasicResampler::new(Aggregator::Sum, 1000).with_seed(seed);
            resampler.resample(&data);
            resampler.distribution().clone()
        };

        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }

    #[test]
    fn replicates_stay_within_sample_bounds() {
        let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 1000);
        resampler.resample(&DATA);
        assert!(resampler.distribution().iter().all(|&x| (0.0..=20.0).contains(&x)));
        assert!(resampler.distribution().as_slice().is_sorted());
    }

    #[test]
    fn constant_data_gives_degenerate_distribution() {
        let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Average, 200);
        resampler.resample(&[3.25; 40]);
        let interval = resampler.interval(0.95).unwrap();
        assert_eq!(interval.lower, 3.25);
        assert_eq!(interval.upper, 3.25);
    }

    #[test]
    fn mean_replicates_centre_on_sample_mean() {
        let data: Vec<f64> = (0..100).map(f64::from).collect();
        let mut resampler: BasicResampler<f64> =
            BasicResampler::new(Aggregator::Average, 2000).with_seed(SEED);
        resampler.resample(&data);

        assert_abs_diff_eq!(resampler.quantile(0.5).unwrap(), 49.5, epsilon = 3.0);
        let interval = resampler.interval(0.9).unwrap();
        assert!(interval.contains(49.5));
        assert!(interval.width() > 0.0);
    }

    #[test]
    fn quantile_query_is_read_only() {
        let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 100);
        resampler.resample(&DATA);
        let before = resampler.distribution().clone();
        let first = resampler.quantile(0.25).unwrap();
        assert_eq!(resampler.quantile(0.25).unwrap(), first);
        assert_eq!(resampler.distribution(), &before);
    }

    #[test]
    fn rejects_out_of_range_query() {
        let mut resampler: BasicResampler<f64> = BasicResampler::new(Aggregator::Sum, 10);
        resampler.resample(&DATA);
        assert_eq!(
            resampler.quantile(1.01),
            Err(Error::InvalidProbability { value: 1.01 })
        );
    }

    #[test]
    fn accepts_injected_generator() {
        let mut resampler: BasicResampler<f32, _> = BasicResampler::with_rng(
            Aggregator::Sum,
            100,
            rand::rngs::StdRng::seed_from_u64(1),
        );
        resampler.resample(&[1.0_f32, 2.0, 3.0]);
        assert_eq!(resampler.distribution().len(), 100);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_run_matches_contract() {
        let data: Vec<f64> = (0..30).map(f64::from).collect();
        let run = || {
            let mut resampler: BasicResampler<f64> =
                BasicResampler::new(Aggregator::Sum, 1000).with_seed(SEED);
            resampler.par_resample(&data);
            resampler.distribution().clone()
        };

        let distribution = run();
        assert_eq!(distribution.len(), 1000);
        assert!(distribution.as_slice().is_sorted());
        assert_eq!(distribution, run());
    }
}
