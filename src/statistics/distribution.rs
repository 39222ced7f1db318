use num_traits::float::TotalOrder;

use super::{Interval, Observation, Probability};
use crate::error::Result;

/// Sorted collection of bootstrap replicates.
///
/// Approximates the sampling distribution of the aggregated statistic.
/// Replicates are appended by a resampler during a run and sorted once when
/// the run completes, so every public read sees sorted data.
///
/// # Float Handling Policy
/// NaN replicates are **kept** (every round contributes exactly one value) and
/// sorted last by IEEE 754 total ordering. A distribution built from empty
/// observations under a quantile aggregator therefore reads NaN everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<T> {
    replicates: Vec<T>,
    sorted: bool,
}

impl<T> Default for Distribution<T> {
    fn default() -> Self {
        Self {
            replicates: Vec::new(),
            sorted: true,
        }
    }
}

impl<T: Observation> Distribution<T> {
    /// Empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sorted distribution from raw replicates.
    pub fn from_replicates(mut replicates: Vec<T>) -> Self {
        replicates.sort_unstable_by(TotalOrder::total_cmp);
        Self {
            replicates,
            sorted: true,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, replicate: T) {
        self.replicates.push(replicate);
        self.sorted = false;
    }

    /// Discards every replicate and prepares room for `rounds` new ones.
    pub(crate) fn restart(&mut self, rounds: usize) {
        self.replicates.clear();
        self.replicates.reserve(rounds);
        self.sorted = true;
    }

    /// Sorts the replicates accumulated since the last [`restart`](Self::restart).
    pub(crate) fn finish(&mut self) {
        if !self.sorted {
            self.replicates.sort_unstable_by(TotalOrder::total_cmp);
            self.sorted = true;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.replicates.clear();
        self.sorted = true;
    }

    /// Number of replicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.replicates.len()
    }

    /// `true` before the first run and after a reset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.replicates.is_empty()
    }

    /// Replicates in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.replicates
    }

    /// Iterates replicates in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.replicates.iter()
    }

    /// Nearest-rank quantile `⌊q·(R − 1)⌋` of the replicates.
    ///
    /// Returns NaN when the distribution is empty and
    /// [`Error::InvalidProbability`](crate::Error::InvalidProbability) when
    /// `q ∉ [0, 1]`. Never mutates the distribution.
    pub fn quantile(&self, q: f64) -> Result<T> {
        Probability::new(q).map(|q| self.quantile_at(q))
    }

    /// [`quantile`](Self::quantile) for an already validated level.
    pub fn quantile_at(&self, q: Probability) -> T {
        if self.replicates.is_empty() {
            return T::nan();
        }
        debug_assert!(self.sorted, "quantile read before the run was finished");
        self.replicates[q.rank(self.replicates.len())]
    }

    /// Percentile confidence interval `[Q(α/2), Q(1 − α/2)]` with `α = 1 − confidence`.
    pub fn interval(&self, confidence: f64) -> Result<Interval<T>> {
        let confidence = Probability::new(confidence)?;
        let alpha = 1.0 - confidence.get();
        let lower = Probability::new(alpha / 2.0)?;
        let upper = Probability::new(1.0 - alpha / 2.0)?;

        Ok(Interval::new(
            self.quantile_at(lower),
            self.quantile_at(upper),
            confidence,
        ))
    }
}

impl<T: Observation> FromIterator<T> for Distribution<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_replicates(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Distribution<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.replicates.iter()
    }
}
