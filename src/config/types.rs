//! Configuration schema.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One weighted source: a weight and the values it emits, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Selection weight. Must be at least 1.
    pub weight: u64,

    /// Values emitted by this source. Must not be empty.
    pub sequence: Vec<i64>,
}

impl SourceConfig {
    pub fn new(weight: u64, sequence: Vec<i64>) -> Self {
        Self { weight, sequence }
    }
}

/// Configuration for a [`WeightedMultiplexer`](crate::mux::WeightedMultiplexer).
///
/// # YAML
///
/// ```yaml
/// seed: 42          # optional
/// sources:          # `iterators` is accepted as an alias
///   - weight: 3
///     sequence: [1, 2, 3]
///   - weight: 1
///     sequence: [10]
/// ```
///
/// # Builder Pattern
///
/// ```
/// use weighted_mux::config::MuxConfig;
///
/// let config = MuxConfig::new()
///     .with_source(3, vec![1, 2, 3])
///     .with_source(1, vec![10])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuxConfig {
    /// Sources, in construction order.
    #[serde(default, alias = "iterators")]
    pub sources: Vec<SourceConfig>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl MuxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source.
    pub fn with_source(mut self, weight: u64, sequence: Vec<i64>) -> Self {
        self.sources.push(SourceConfig::new(weight, sequence));
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of values across all sources.
    pub fn total_len(&self) -> usize {
        self.sources.iter().map(|s| s.sequence.len()).sum()
    }

    /// Validates the configuration.
    ///
    /// Reports the first source with a zero weight or an empty sequence.
    /// An empty source list is valid.
    pub fn validate(&self) -> Result<()> {
        for (index, source) in self.sources.iter().enumerate() {
            if source.weight == 0 {
                return Err(Error::InvalidWeight { index });
            }
            if source.sequence.is_empty() {
                return Err(Error::EmptySequence { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MuxConfig::default();
        assert!(config.sources.is_empty());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MuxConfig::new()
            .with_source(2, vec![1, 2])
            .with_source(5, vec![3])
            .with_seed(42);

        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0], SourceConfig::new(2, vec![1, 2]));
        assert_eq!(config.sources[1].weight, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.total_len(), 3);
    }

    #[test]
    fn test_validate_ok() {
        let config = MuxConfig::new().with_source(1, vec![0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_weight() {
        let config = MuxConfig::new()
            .with_source(1, vec![1])
            .with_source(0, vec![2]);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidWeight { index: 1 })
        ));
    }

    #[test]
    fn test_validate_empty_sequence() {
        let config = MuxConfig::new().with_source(4, vec![]);
        assert!(matches!(
            config.validate(),
            Err(Error::EmptySequence { index: 0 })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = MuxConfig::new()
            .with_source(3, vec![1, -2, 3])
            .with_source(1, vec![10])
            .with_seed(42);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: MuxConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_unset_seed_not_serialized() {
        let config = MuxConfig::new().with_source(2, vec![7]);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("seed"), "unexpected seed in {yaml}");
        let back: MuxConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.seed, None);
        assert_eq!(back.total_len(), 1);
    }

    #[test]
    fn test_validate_reports_first_offender() {
        let config = MuxConfig::new()
            .with_source(1, vec![])
            .with_source(0, vec![1]);
        assert!(matches!(
            config.validate(),
            Err(Error::EmptySequence { index: 0 })
        ));
    }
}
