//! Application configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `MYOMORPH_`
//!
//! Example environment variable: `MYOMORPH_POPULATION__ORGANISMS_NR=20`
//!
//! Command-line flags are applied on top by `main`.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use myomorph_creature::{ActiveWindow, AnchorSizing, PopulationConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub population: PopulationSettings,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Population limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationSettings {
    /// Requested organism count (one fewer is generated)
    pub organisms_nr: usize,
    /// Maximum anchors per organism (at least 2)
    pub anchors_nr_limit: usize,
    /// Maximum requested muscles per organism (at least 1)
    pub muscles_nr_limit: usize,
    /// Organism sizes are sampled below this
    pub size_limit: f32,
    /// How anchor sizes are derived
    pub anchor_sizing: AnchorSizing,
}

impl Default for PopulationSettings {
    fn default() -> Self {
        let defaults = PopulationConfig::default();
        Self {
            organisms_nr: defaults.organisms_nr,
            anchors_nr_limit: defaults.anchors_nr_limit,
            muscles_nr_limit: defaults.muscles_nr_limit,
            size_limit: defaults.size_limit,
            anchor_sizing: AnchorSizing::default(),
        }
    }
}

impl PopulationSettings {
    /// Generation config with anchors in local organism coordinates
    pub fn to_config(&self) -> PopulationConfig {
        let mut config = PopulationConfig {
            organisms_nr: self.organisms_nr,
            anchors_nr_limit: self.anchors_nr_limit,
            muscles_nr_limit: self.muscles_nr_limit,
            size_limit: self.size_limit,
            ..PopulationConfig::default()
        };
        config.placement.sizing = self.anchor_sizing;
        config
    }

    /// Generation config with anchors placed inside `window`
    pub fn to_windowed_config(&self, window: ActiveWindow) -> PopulationConfig {
        let mut config = self.to_config();
        config.placement.window = Some(window);
        config
    }
}

/// Active window the physics extension runs in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl WindowConfig {
    pub fn active_window(&self) -> ActiveWindow {
        ActiveWindow::new(self.width as f32, self.height as f32)
    }
}

/// Snapshot and animation output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Animation frames per second
    pub fps: u16,
    /// Number of physics steps captured in an animation
    pub frames: usize,
    /// Gap between organisms in a snapshot grid, in pixels
    pub tile_margin: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            frames: 180,
            tile_margin: 10,
        }
    }
}

/// `MYOMORPH_` prefix, `__` between nested keys
fn environment() -> Environment {
    Environment::with_prefix("MYOMORPH")
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `MYOMORPH_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self> {
        let defaults = AppConfig::default();

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default(
                "population.organisms_nr",
                defaults.population.organisms_nr as i64,
            )?
            .set_default(
                "population.anchors_nr_limit",
                defaults.population.anchors_nr_limit as i64,
            )?
            .set_default(
                "population.muscles_nr_limit",
                defaults.population.muscles_nr_limit as i64,
            )?
            .set_default(
                "population.size_limit",
                defaults.population.size_limit as f64,
            )?
            .set_default(
                "population.anchor_sizing",
                defaults.population.anchor_sizing.to_string(),
            )?
            .set_default("window.width", defaults.window.width as i64)?
            .set_default("window.height", defaults.window.height as i64)?
            .set_default("render.fps", defaults.render.fps as i64)?
            .set_default("render.frames", defaults.render.frames as i64)?
            .set_default("render.tile_margin", defaults.render.tile_margin as i64)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("config")
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (MYOMORPH_WINDOW__WIDTH, etc.)
            .add_source(environment);

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
