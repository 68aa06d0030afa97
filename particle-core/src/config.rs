use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bounds for the on-screen size of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidthRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WidthRange {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}

/// Tuning constants of the particle engine.
///
/// None of these are derived from physical law; the defaults are the values
/// the simulation was tuned to by eye.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scales every gravity well's pull.
    pub gravitational_constant: f64,
    /// Upper bound on the magnitude of a single well's force.
    pub force_cap: f64,
    /// Velocity multiplier applied once per tick.
    pub friction: f64,
    /// Clamp range of [`crate::particle::Particle::display_width`].
    pub width: WidthRange,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 10.0,
            force_cap: 0.1,
            friction: 0.99,
            width: WidthRange::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("gravitational_constant", self.gravitational_constant),
            ("force_cap", self.force_cap),
            ("friction", self.friction),
            ("width.min", self.width.min),
            ("width.max", self.width.max),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.force_cap < 0.0 {
            return Err(ConfigError::NegativeForceCap(self.force_cap));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if self.width.min < 0.0 || self.width.min > self.width.max {
            return Err(ConfigError::InvalidWidthRange {
                min: self.width.min,
                max: self.width.max,
            });
        }
        Ok(())
    }
}
