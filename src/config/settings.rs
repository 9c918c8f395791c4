//! Configuration settings for the simulation and front-end

use crate::domain::{Algorithm, BoundingBox, NeutralNeighbors, Pattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seeding: SeedingConfig,
    pub competitive: CompetitiveConfig,
    /// Extra stampable patterns, appended after the built-in presets
    pub patterns: Vec<Pattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub algorithm: Algorithm,
    /// Seconds between generations
    pub update_interval_secs: f32,
    pub min_interval_secs: f32,
    pub max_interval_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    pub width: i32,
    pub height: i32,
    /// Chance for each cell of the region to start alive
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompetitiveConfig {
    pub neutral_neighbors: NeutralNeighbors,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            update_interval_secs: 0.05,
            min_interval_secs: 0.001,
            max_interval_secs: 1.0,
        }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            density: 0.5,
        }
    }
}

impl SeedingConfig {
    /// Seeding region centered on the origin
    pub fn region(&self) -> BoundingBox {
        BoundingBox::centered(self.width, self.height)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !(sim.min_interval_secs > 0.0 && sim.min_interval_secs <= sim.max_interval_secs) {
            anyhow::bail!(
                "Interval bounds must satisfy 0 < min <= max, got {}..{}",
                sim.min_interval_secs,
                sim.max_interval_secs
            );
        }

        if !(sim.min_interval_secs..=sim.max_interval_secs).contains(&sim.update_interval_secs) {
            anyhow::bail!(
                "Update interval {} is outside {}..{}",
                sim.update_interval_secs,
                sim.min_interval_secs,
                sim.max_interval_secs
            );
        }

        if self.seeding.width <= 0 || self.seeding.height <= 0 {
            anyhow::bail!("Seeding region must have positive width and height");
        }

        if !(0.0..=1.0).contains(&self.seeding.density) {
            anyhow::bail!("Seeding density must be within 0..1, got {}", self.seeding.density);
        }

        if let Some(pattern) = self.patterns.iter().find(|p| p.cells.is_empty()) {
            anyhow::bail!("Pattern '{}' has no cells", pattern.name);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(interval) = cli_overrides.update_interval_secs {
            self.simulation.update_interval_secs = interval;
        }
        if let Some(algorithm) = cli_overrides.algorithm {
            self.simulation.algorithm = algorithm;
        }
        if let Some(density) = cli_overrides.density {
            self.seeding.density = density;
        }
        if let Some(neutral) = cli_overrides.neutral_neighbors {
            self.competitive.neutral_neighbors = neutral;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub update_interval_secs: Option<f32>,
    pub algorithm: Option<Algorithm>,
    pub density: Option<f64>,
    pub neutral_neighbors: Option<NeutralNeighbors>,
}
