//! Scenario files for the viewer.
//!
//! A scenario is a YAML document; every key is optional and falls back to
//! the default shown here:
//!
//! ```yaml
//! engine:
//!   gravitational_constant: 10.0
//!   force_cap: 0.1
//!   friction: 0.99
//!   width: { min: 1.0, max: 10.0 }
//! particles: 500          # particles scattered on reset
//! tick_ms: 20             # simulation tick length
//! particle_color: { r: 200, g: 0, b: 0, a: 102 }
//! well_mass: 1.0          # mass of the well that follows the pointer
//! jitter:                 # random wobble until the first interaction; `null` disables
//!   spread: 1.0
//!   scale: 0.05
//! pinned_wells:           # wells present from the start
//!   - { position: [100.0, 100.0], mass: -0.5 }
//! ```

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, ensure};
use particle_core::{EngineConfig, GravityWell, JitterConfig, Rgba};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub particles: usize,
    pub tick_ms: u64,
    pub particle_color: Rgba,
    pub well_mass: f64,
    pub jitter: Option<JitterConfig>,
    pub pinned_wells: Vec<GravityWell>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            particles: 500,
            tick_ms: 20,
            particle_color: Rgba::from_css(200, 0, 0, 0.4),
            well_mass: 1.0,
            jitter: Some(JitterConfig::default()),
            pinned_wells: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(source).context("invalid scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let cfg: Self = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Rejects settings the viewer cannot run with.
    ///
    /// Every number that reaches the simulation (engine constants, jitter,
    /// pinned wells) must be finite, so a scenario can never inject NaN into
    /// particle state.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        ensure!(self.tick_ms > 0, "tick_ms must be positive");
        ensure!(self.well_mass.is_finite(), "well_mass must be finite");
        if let Some(jitter) = &self.jitter {
            jitter.validate()?;
        }
        for (i, well) in self.pinned_wells.iter().enumerate() {
            ensure!(
                well.position.is_finite() && well.mass.is_finite(),
                "pinned well {i} must have a finite position and mass"
            );
        }
        Ok(())
    }

    pub fn tick_seconds(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}
