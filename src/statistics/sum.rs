use num_traits::Float;

use super::Statistic;

/// Arithmetic sum with **Kahan summation**.
///
/// The compensation term keeps long bootstrap replicates of many small values
/// from drifting. An empty sample sums to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl<D, T> Statistic<D, T> for Sum
where
    D: AsRef<[T]>,
    T: Float,
{
    #[inline]
    fn compute(&self, data: &D) -> T {
        kahan_sum(data.as_ref())
    }
}

pub(crate) fn kahan_sum<T: Float>(slice: &[T]) -> T {
    let mut sum = T::zero();
    let mut c = T::zero();

    for &x in slice {
        let y = x - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum
}
