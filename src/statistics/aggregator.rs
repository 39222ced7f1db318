use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Mean, Observation, Probability, Quantile, Statistic, Sum};
use crate::error::Result;

/// Reduces one resampled sample to a single replicate value.
///
/// A closed set of stateless reducers. Aggregators are `Copy`, never mutated
/// and safe to share across concurrently running rounds.
///
/// | Variant    | Result                          | Empty input |
/// |------------|---------------------------------|-------------|
/// | `Sum`      | Kahan sum                       | `0`         |
/// | `Average`  | `Sum / n`                       | `0`         |
/// | `Quantile` | nearest rank `⌊p·(n − 1)⌋`      | NaN         |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Aggregator {
    /// Arithmetic sum.
    Sum,
    /// Arithmetic mean.
    Average,
    /// Nearest-rank quantile at level `p`.
    Quantile {
        /// Quantile level.
        p: Probability,
    },
}

impl Aggregator {
    /// Quantile aggregator for `p ∈ [0, 1]`.
    pub fn quantile(p: f64) -> Result<Self> {
        Probability::new(p).map(|p| Self::Quantile { p })
    }

    /// Median aggregator.
    pub const fn median() -> Self {
        Self::Quantile { p: Probability::HALF }
    }

    /// Applies the aggregator to `values`.
    #[inline]
    pub fn aggregate<T: Observation>(&self, values: &[T]) -> T {
        match *self {
            Self::Sum => Sum.compute(&values),
            Self::Average => Mean.compute(&values),
            Self::Quantile { p } => Quantile::at(p).compute(&values),
        }
    }
}

impl<D, T> Statistic<D, T> for Aggregator
where
    D: AsRef<[T]>,
    T: Observation,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        self.aggregate(data.as_ref())
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => f.write_str("sum"),
            Self::Average => f.write_str("average"),
            Self::Quantile { p } => write!(f, "quantile({})", p.get()),
        }
    }
}
