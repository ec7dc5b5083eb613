//! Configuration types for the particle field simulation.

use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of cells in the 1D field.
    pub field_size: usize,
    /// Number of time steps to run.
    pub steps: u64,
    /// Number of particles seeded at startup.
    pub particle_count: usize,
    /// Random seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            field_size: 10,
            steps: 20,
            particle_count: 3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Largest spacing that fits `particle_count` evenly spaced particles.
    ///
    /// Requires `particle_count >= 2` (checked by [`validate`](Self::validate)).
    #[inline]
    pub fn max_spacing(&self) -> usize {
        (self.field_size - 1) / (self.particle_count - 1)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_size == 0 {
            return Err(ConfigError::InvalidFieldSize);
        }
        if self.particle_count < 2 {
            return Err(ConfigError::TooFewParticles {
                particle_count: self.particle_count,
            });
        }
        if self.max_spacing() < 2 {
            return Err(ConfigError::SpacingInfeasible {
                field_size: self.field_size,
                particle_count: self.particle_count,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Field size must be non-zero")]
    InvalidFieldSize,
    #[error("At least 2 particles required, got {particle_count}")]
    TooFewParticles { particle_count: usize },
    #[error(
        "Field of {field_size} cells too small for even spacing of {particle_count} particles"
    )]
    SpacingInfeasible {
        field_size: usize,
        particle_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_spacing(), 4);
    }

    #[test]
    fn test_zero_field_size_rejected() {
        let config = SimulationConfig {
            field_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFieldSize)
        ));
    }

    #[test]
    fn test_single_particle_rejected() {
        let config = SimulationConfig {
            particle_count: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewParticles { particle_count: 1 })
        ));
    }

    #[test]
    fn test_cramped_field_rejected() {
        // (4 - 1) / (3 - 1) = 1 < 2
        let config = SimulationConfig {
            field_size: 4,
            particle_count: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpacingInfeasible { .. })
        ));
    }

    #[test]
    fn test_seed_defaults_to_none_in_json() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"field_size":10,"steps":20,"particle_count":3}"#).unwrap();
        assert!(config.seed.is_none());
    }
}
