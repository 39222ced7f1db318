use thiserror::Error;

/// Contract violations rejected at construction or call boundaries.
///
/// Degenerate inputs (an empty observation sequence, a resampler that has not
/// run yet) are not errors: they produce NaN or zero sentinels instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A quantile level, percentile or confidence level outside `[0, 1]`.
    #[error("probability must lie in [0, 1], got {value}")]
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },

    /// A presampled resampler configured with an index pool of size zero.
    #[error("index pool size must be at least 1")]
    EmptyPool,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
