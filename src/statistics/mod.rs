use num_traits::float::TotalOrder;
use num_traits::{Float, FromPrimitive};

/// A statistic computed over a sample.
pub trait Statistic<D, T> {
    /// Evaluates the statistic on `data`.
    fn compute(&self, data: &D) -> T;
}

/// Scalar observation type accepted by aggregators and resamplers.
///
/// Blanket-implemented for every float with a total order, in practice `f64`
/// and `f32`. `Send + Sync` lets rounds run on worker threads.
pub trait Observation: Float + FromPrimitive + TotalOrder + Send + Sync {}

impl<T> Observation for T where T: Float + FromPrimitive + TotalOrder + Send + Sync {}

mod aggregator;
mod ci;
mod distribution;
mod mean;
mod probability;
mod quantile;
mod sum;

pub use aggregator::Aggregator;
pub use ci::Interval;
pub use distribution::Distribution;
pub use mean::Mean;
pub use probability::Probability;
pub use quantile::Quantile;
pub use sum::Sum;
