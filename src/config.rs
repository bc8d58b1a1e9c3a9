//! Simulation configuration and validation.
//!
//! Every knob the host exposes (map dimensions, water probability, spawn
//! separation, per-bot settings) lives here and is validated up front;
//! invalid values are rejected before any world is built rather than
//! surfacing mid-simulation.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid configuration, reported before any world state exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("water probability must be within [0, 1], got {0}")]
    InvalidWaterProbability(f32),

    #[error("fixed timestep must be positive, got {0}")]
    InvalidTimestep(f32),

    #[error("expansion interval for faction {faction} must be positive, got {interval}")]
    InvalidExpansionInterval { faction: u8, interval: f32 },

    #[error("spawn slot for faction {faction} must be 1 or 2, got {slot}")]
    InvalidSpawnSlot { faction: u8, slot: u8 },

    #[error("faction id 0 is reserved for neutral territory")]
    NeutralFaction,

    #[error("duplicate faction id {0}")]
    DuplicateFaction(u8),
}

/// Map generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map width in cells.
    pub width: i32,
    /// Map height in cells.
    pub height: i32,
    /// Chance for each cell to be water, in `[0, 1]`.
    pub water_probability: f32,
    /// Minimum hex distance between the two spawn cells. Best-effort: when
    /// unsatisfiable the generator degrades to the farthest available pair.
    pub min_spawn_distance: u32,
    /// Seed for deterministic generation and bot decisions.
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            water_probability: 0.2,
            min_spawn_distance: 10,
            seed: 12345,
        }
    }
}

/// Settings for one territory bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Owner id painted onto claimed cells. Must not be 0 (neutral).
    pub faction: u8,
    /// Which generated spawn the bot starts from: 1 or 2.
    pub spawn_slot: u8,
    /// Seconds between expansion steps.
    pub expansion_interval: f32,
}

/// Top-level simulation configuration.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed timestep in seconds (e.g., 1/30 for 30 Hz).
    pub fixed_timestep: f32,
    pub map: MapConfig,
    pub bots: Vec<BotConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 30.0,
            map: MapConfig::default(),
            bots: vec![
                BotConfig {
                    faction: 1,
                    spawn_slot: 1,
                    expansion_interval: 5.0,
                },
                BotConfig {
                    faction: 2,
                    spawn_slot: 2,
                    expansion_interval: 5.0,
                },
            ],
        }
    }
}

impl SimConfig {
    /// Reject invalid parameters. NaN fails every range check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width <= 0 || self.map.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.map.width,
                height: self.map.height,
            });
        }
        if !(0.0..=1.0).contains(&self.map.water_probability) {
            return Err(ConfigError::InvalidWaterProbability(
                self.map.water_probability,
            ));
        }
        if !(self.fixed_timestep > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.fixed_timestep));
        }

        let mut seen = Vec::with_capacity(self.bots.len());
        for bot in &self.bots {
            if bot.faction == 0 {
                return Err(ConfigError::NeutralFaction);
            }
            if seen.contains(&bot.faction) {
                return Err(ConfigError::DuplicateFaction(bot.faction));
            }
            seen.push(bot.faction);

            if !(1..=2).contains(&bot.spawn_slot) {
                return Err(ConfigError::InvalidSpawnSlot {
                    faction: bot.faction,
                    slot: bot.spawn_slot,
                });
            }
            if !(bot.expansion_interval > 0.0) {
                return Err(ConfigError::InvalidExpansionInterval {
                    faction: bot.faction,
                    interval: bot.expansion_interval,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let mut config = SimConfig::default();
        config.map.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));

        let mut config = SimConfig::default();
        config.map.height = -3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_water_probability_outside_unit_range() {
        let mut config = SimConfig::default();
        config.map.water_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaterProbability(_))
        ));

        config.map.water_probability = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaterProbability(_))
        ));

        config.map.water_probability = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaterProbability(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_timestep() {
        let mut config = SimConfig::default();
        config.fixed_timestep = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));
    }

    #[test]
    fn test_rejects_bad_bot_settings() {
        let mut config = SimConfig::default();
        config.bots[0].expansion_interval = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExpansionInterval { faction: 1, .. })
        ));

        let mut config = SimConfig::default();
        config.bots[1].spawn_slot = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnSlot { faction: 2, slot: 3 })
        ));

        let mut config = SimConfig::default();
        config.bots[0].faction = 0;
        assert_eq!(config.validate(), Err(ConfigError::NeutralFaction));

        let mut config = SimConfig::default();
        config.bots[1].faction = config.bots[0].faction;
        assert_eq!(config.validate(), Err(ConfigError::DuplicateFaction(1)));
    }

    #[test]
    fn test_boundary_water_probabilities_are_valid() {
        let mut config = SimConfig::default();
        config.map.water_probability = 0.0;
        assert_eq!(config.validate(), Ok(()));
        config.map.water_probability = 1.0;
        assert_eq!(config.validate(), Ok(()));
    }
}
