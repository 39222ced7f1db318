use num_traits::Float;

use super::Probability;

/// Confidence bounds read from a replicate distribution.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Interval<T> {
    /// Lower bound.
    pub lower: T,
    /// Upper bound.
    pub upper: T,
    /// Nominal coverage of `[lower, upper]`.
    pub confidence: Probability,
}

impl<T: Float> Interval<T> {
    /// Creates an interval with the given nominal coverage.
    #[inline]
    pub const fn new(lower: T, upper: T, confidence: Probability) -> Self {
        Self {
            lower,
            upper,
            confidence,
        }
    }

    /// Check if value lies within `[lower, upper]` (inclusive).
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Interval width: `upper - lower`.
    #[inline]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Midpoint: `(lower + upper) / 2`.
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.lower + self.upper) / (T::one() + T::one())
    }

    /// `true` when either bound is NaN (no replicates, or NaN replicates).
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }
}
