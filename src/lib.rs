//! Bootstrap estimation of a statistic's sampling distribution.
//!
//! An [`Aggregator`] reduces a sample to one value (sum, mean or a
//! nearest-rank percentile). A resampler repeatedly draws same-size samples
//! with replacement from the observations, aggregates each one, and keeps the
//! sorted replicates as an empirical [`Distribution`] from which confidence
//! bounds are read without assuming a parametric shape.
//!
//! Two strategies implement [`Resample`]:
//! - [`BasicResampler`] draws fresh indices every round;
//! - [`PresampledResampler`] reuses a pool of index sets generated once per
//!   run, trading replicate independence for fewer random draws.
//!
//! ```
//! use bootci::{Aggregator, BasicResampler, Resample};
//!
//! let latencies = [12.0, 15.5, 9.8, 11.2, 14.1, 10.7, 13.3, 12.9];
//! let mut resampler: BasicResampler<f64> =
//!     BasicResampler::new(Aggregator::median(), 2_000).with_seed(7);
//! resampler.resample(&latencies);
//!
//! let bounds = resampler.interval(0.9)?;
//! assert!(bounds.lower <= resampler.quantile(0.5)?);
//! assert!(resampler.quantile(0.5)? <= bounds.upper);
//! # Ok::<(), bootci::Error>(())
//! ```
//!
//! Each resampler owns its random source ([`rng::DefaultRng`] unless another
//! generator is injected), so runs are reproducible per seed and independent
//! of each other.

mod config;
mod error;
mod resample;
pub mod rng;
mod statistics;

pub use crate::config::{ResamplerConfig, Strategy};
pub use crate::error::{Error, Result};
pub use crate::resample::*;
pub use crate::statistics::*;
pub use rand;
