use serde::{Deserialize, Serialize};

use crate::Aggregator;

/// Declarative description of a resampler.
///
/// ```json
/// {
///   "aggregator": { "kind": "quantile", "p": 0.5 },
///   "rounds": 2000,
///   "strategy": { "kind": "presampled", "pool_size": 2000 },
///   "seed": 42
/// }
/// ```
///
/// `strategy` defaults to `basic`; `seed` defaults to
/// [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResamplerConfig {
    /// Reducer applied to every round.
    pub aggregator: Aggregator,
    /// Replicates produced per run.
    pub rounds: usize,
    /// Resampling strategy.
    #[serde(default)]
    pub strategy: Strategy,
    /// Seed of the resampler's random source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ResamplerConfig {
    /// Basic strategy, default seed.
    pub const fn new(aggregator: Aggregator, rounds: usize) -> Self {
        Self {
            aggregator,
            rounds,
            strategy: Strategy::Basic,
            seed: None,
        }
    }

    /// Switches to the presampled strategy with `pool_size` cached index sets.
    #[must_use]
    pub const fn presampled(mut self, pool_size: usize) -> Self {
        self.strategy = Strategy::Presampled { pool_size };
        self
    }

    /// Fixes the seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// How rounds obtain their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Fresh random indices every round.
    #[default]
    Basic,
    /// Rounds pick from `pool_size` index sets generated once per run.
    Presampled {
        /// Number of cached index sets.
        pool_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let config: ResamplerConfig = serde_json::from_str(
            r#"{
                "aggregator": { "kind": "quantile", "p": 0.5 },
                "rounds": 2000,
                "strategy": { "kind": "presampled", "pool_size": 2000 },
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            ResamplerConfig::new(Aggregator::median(), 2000)
                .presampled(2000)
                .seed(42)
        );
    }

    #[test]
    fn strategy_and_seed_are_optional() {
        let config: ResamplerConfig =
            serde_json::from_str(r#"{ "aggregator": { "kind": "sum" }, "rounds": 10 }"#).unwrap();
        assert_eq!(config.strategy, Strategy::Basic);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_unknown_fields_and_bad_levels() {
        assert!(
            serde_json::from_str::<ResamplerConfig>(
                r#"{ "aggregator": { "kind": "sum" }, "rounds": 10, "threads": 4 }"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<ResamplerConfig>(
                r#"{ "aggregator": { "kind": "quantile", "p": -1 }, "rounds": 10 }"#
            )
            .is_err()
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = ResamplerConfig::new(Aggregator::Average, 500).presampled(64);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("seed"));
        assert_eq!(serde_json::from_str::<ResamplerConfig>(&json).unwrap(), config);
    }
}
