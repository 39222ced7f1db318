use num_traits::{Float, FromPrimitive};

use super::Statistic;
use super::sum::kahan_sum;

/// Arithmetic mean, computed as the Kahan [`Sum`](super::Sum) divided by `n`.
///
/// Dividing the very same sum keeps `Mean(x) == Sum(x) / len(x)` bit-exact.
/// An empty sample yields zero rather than NaN, so an empty observation
/// sequence propagates as a zero replicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();

        if slice.is_empty() {
            return T::zero();
        }

        T::from_usize(slice.len()).map_or_else(T::nan, |n| kahan_sum(slice) / n)
    }
}
