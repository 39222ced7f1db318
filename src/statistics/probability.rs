use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A probability level in `[0, 1]`.
///
/// Used for quantile aggregators, quantile queries over a replicate
/// distribution and confidence levels. NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// `p = 0`, selects the minimum.
    pub const ZERO: Self = Self(0.0);
    /// `p = 0.5`, selects the median.
    pub const HALF: Self = Self(0.5);
    /// `p = 1`, selects the maximum.
    pub const ONE: Self = Self(1.0);

    /// Validates `p ∈ [0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(Error::InvalidProbability { value: p })
        }
    }

    /// The raw level.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Nearest-rank index `⌊p·(len − 1)⌋` into a sorted slice of `len` items.
    ///
    /// No interpolation: the result always names an existing element.
    /// Returns 0 for `len == 0`; callers handle the empty case themselves.
    #[inline]
    pub fn rank(self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        ((self.0 * last as f64).floor() as usize).min(last)
    }
}

impl TryFrom<f64> for Probability {
    type Error = Error;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_closed_unit_interval() {
        assert_eq!(Probability::new(0.0).unwrap(), Probability::ZERO);
        assert_eq!(Probability::new(1.0).unwrap(), Probability::ONE);
        assert_eq!(Probability::new(0.25).unwrap().get(), 0.25);
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        for p in [-0.01, 1.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Probability::new(p),
                Err(Error::InvalidProbability { .. })
            ));
        }
    }

    #[test]
    fn nearest_rank_truncates() {
        assert_eq!(Probability::new(0.33).unwrap().rank(5), 1);
        assert_eq!(Probability::HALF.rank(5), 2);
        assert_eq!(Probability::HALF.rank(2000), 999);
        assert_eq!(Probability::ONE.rank(2000), 1999);
        assert_eq!(Probability::ZERO.rank(2000), 0);
    }

    #[test]
    fn rank_of_empty_is_zero() {
        assert_eq!(Probability::ONE.rank(0), 0);
    }

    #[test]
    fn deserialises_through_validation() {
        let p: Probability = serde_json::from_str("0.9").unwrap();
        assert_eq!(p.get(), 0.9);
        assert!(serde_json::from_str::<Probability>("1.5").is_err());
        assert_eq!(serde_json::to_string(&Probability::HALF).unwrap(), "0.5");
    }
}
