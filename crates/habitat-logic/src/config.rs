//! Scene configuration — boundary geometry and advice thresholds.
//!
//! Defaults reproduce [`crate::constants`]. Hosts start from the bundled
//! `data/scene.json` and may load overrides from another JSON file; missing
//! fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::advice;
use crate::error::{ConfigError, HabitatError};
use crate::geometry::Boundary;

/// Thresholds used by the advice engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    pub hygiene_kitchen_min_distance: f32,
    pub sleep_exercise_min_distance: f32,
    pub target_crew_capacity: u32,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            hygiene_kitchen_min_distance: advice::HYGIENE_KITCHEN_MIN_DISTANCE,
            sleep_exercise_min_distance: advice::SLEEP_EXERCISE_MIN_DISTANCE,
            target_crew_capacity: advice::TARGET_CREW_CAPACITY,
        }
    }
}

/// Everything a designer session needs besides the module templates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub boundary: Boundary,
    pub advice: AdviceConfig,
}

/// Scene configuration shipped with the crate.
const BUNDLED_SCENE: &str = include_str!("../../../data/scene.json");

impl SceneConfig {
    /// The bundled scene configuration, used when no `--config` is given.
    pub fn bundled() -> Result<Self, HabitatError> {
        Self::from_json_str(BUNDLED_SCENE)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, HabitatError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(HabitatError::InvalidConfig(errors));
        }
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HabitatError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene config from {} (boundary r={} at ({}, {}))",
            path.display(),
            config.boundary.radius,
            config.boundary.center.x,
            config.boundary.center.y
        );
        Ok(config)
    }

    /// Validate the configuration, returning all errors found.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // NaN fails this comparison too
        if !(self.boundary.radius > 0.0) {
            errors.push(ConfigError::NonPositiveRadius(self.boundary.radius));
        }
        let center = self.boundary.center;
        if !center.x.is_finite() || !center.y.is_finite() {
            errors.push(ConfigError::NonFiniteCenter {
                x: center.x,
                y: center.y,
            });
        }

        let thresholds = [
            (
                "hygiene_kitchen_min_distance",
                self.advice.hygiene_kitchen_min_distance,
            ),
            (
                "sleep_exercise_min_distance",
                self.advice.sleep_exercise_min_distance,
            ),
        ];
        for (name, value) in thresholds {
            if !(value > 0.0) {
                errors.push(ConfigError::NonPositiveThreshold { name, value });
            }
        }

        if self.advice.target_crew_capacity == 0 {
            errors.push(ConfigError::ZeroCapacityTarget);
        }

        errors
    }
}
