use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{error::NoiseError, field::GradientNoiseField};

pub const DEFAULT_TABLE_SIZE: usize = 256;
pub const MAX_TABLE_SIZE: usize = 1 << 16;

// How the permutation table is shuffled after it is filled with 0..B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleMode {
    // Walk i from B-1 down to 1 and swap with j in [0, i).
    // Index 0 is only ever a swap destination.
    #[default]
    Reference,
    // Textbook Fisher–Yates, j in [0, i]
    FisherYates,
}

// Parameters for building a GradientNoiseField.
// Missing keys fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub table_size: usize,    // lattice period B, power of two
    pub shuffle: ShuffleMode, // permutation shuffle variant
    pub seed: Option<u64>,    // None draws from the thread RNG
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            shuffle: ShuffleMode::default(),
            seed: None,
        }
    }
}

impl NoiseConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), NoiseError> {
        let size = self.table_size;
        if size < 2 || size > MAX_TABLE_SIZE || !size.is_power_of_two() {
            return Err(NoiseError::InvalidTableSize(size));
        }
        Ok(())
    }

    // Build a field from `seed`, or from the thread RNG when no seed is set
    pub fn build(&self) -> Result<GradientNoiseField, NoiseError> {
        match self.seed {
            Some(seed) => GradientNoiseField::with_config(self, &mut StdRng::seed_from_u64(seed)),
            None => GradientNoiseField::with_config(self, &mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NoiseConfig::default();
        assert_eq!(config.table_size, 256);
        assert_eq!(config.shuffle, ShuffleMode::Reference);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_power_of_two() {
        let config = NoiseConfig {
            table_size: 300,
            ..NoiseConfig::default()
        };
        assert_eq!(config.validate(), Err(NoiseError::InvalidTableSize(300)));
    }

    #[test]
    fn validate_rejects_out_of_range_sizes() {
        for size in [0, 1, MAX_TABLE_SIZE * 2] {
            let config = NoiseConfig {
                table_size: size,
                ..NoiseConfig::default()
            };
            assert_eq!(config.validate(), Err(NoiseError::InvalidTableSize(size)));
        }
    }

    #[test]
    fn validate_accepts_bounds() {
        for size in [2, 16, MAX_TABLE_SIZE] {
            let config = NoiseConfig {
                table_size: size,
                ..NoiseConfig::default()
            };
            assert!(config.validate().is_ok(), "size {size} rejected");
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: NoiseConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config, NoiseConfig::seeded(42));
    }

    #[test]
    fn shuffle_mode_uses_snake_case_names() {
        let config: NoiseConfig =
            serde_json::from_str(r#"{ "table_size": 64, "shuffle": "fisher_yates" }"#).unwrap();
        assert_eq!(config.table_size, 64);
        assert_eq!(config.shuffle, ShuffleMode::FisherYates);
    }

    #[test]
    fn build_with_seed_is_reproducible() {
        let config = NoiseConfig::seeded(99);
        let a = config.build().unwrap();
        let b = config.build().unwrap();
        assert_eq!(a.permutation(), b.permutation());
        assert_eq!(a.evaluate3(0.3, 1.7, -2.2), b.evaluate3(0.3, 1.7, -2.2));
    }

    #[test]
    fn build_without_seed_still_produces_valid_field() {
        let field = NoiseConfig::default().build().unwrap();
        assert_eq!(field.table_size(), 256);
    }

    #[test]
    fn build_propagates_validation_error() {
        let config = NoiseConfig {
            table_size: 100,
            seed: Some(1),
            ..NoiseConfig::default()
        };
        assert_eq!(
            config.build().unwrap_err(),
            NoiseError::InvalidTableSize(100)
        );
    }
}
