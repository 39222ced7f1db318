use num_traits::Float;
use num_traits::float::TotalOrder;

use super::{Probability, Statistic};
use crate::error::Result;

/// Nearest-rank quantile of a sample.
///
/// Selects the element at rank `⌊p·(n − 1)⌋` of the sorted sample, without
/// interpolation, so `p = 0` is the minimum and `p = 1` the maximum.
/// Sorting uses IEEE 754 total ordering; NaN observations sort last.
///
/// An empty sample yields NaN.
///
/// # Performance
/// - O(n) selection on a copy of the input (the caller's data is untouched)
/// - One allocation per call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantile {
    p: Probability,
}

impl Quantile {
    /// Creates a quantile estimator for `p ∈ [0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        Probability::new(p).map(Self::at)
    }

    /// Creates a quantile estimator from an already validated level.
    #[inline]
    pub const fn at(p: Probability) -> Self {
        Self { p }
    }

    /// Convenience constructor for the median (p = 0.5).
    #[inline]
    pub const fn median() -> Self {
        Self::at(Probability::HALF)
    }

    /// The configured level.
    #[inline]
    pub const fn probability(&self) -> Probability {
        self.p
    }
}

impl<D, T> Statistic<D, T> for Quantile
where
    D: AsRef<[T]>,
    T: Float + TotalOrder,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        if slice.is_empty() {
            return T::nan();
        }

        let mut scratch = slice.to_vec();
        let rank = self.p.rank(scratch.len());
        let (_, nth, _) = scratch.select_nth_unstable_by(rank, TotalOrder::total_cmp);
        *nth
    }
}
