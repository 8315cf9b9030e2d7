//! Host configuration for the simulation, loaded from TOML.
//!
//! ```toml
//! rows = 20
//! cols = 20
//! generation_interval_ms = 500
//! pattern = "r-pentomino"   # any preset name, "demo" or "random"
//! rule = "B3/S23"
//! parallel = false
//! ```

use std::{path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;

use crate::application::{Controller, Ticker};
use crate::domain::{GridError, RuleParseError, Simulation, demo_seed, presets, random_seed, rule_from_str};

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
    #[error(transparent)]
    Rule(#[from] RuleParseError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub rows: i64,
    pub cols: i64,
    /// Host tick period in milliseconds
    pub generation_interval_ms: u64,
    pub pattern: String,
    /// Alive probability when `pattern = "random"`
    pub density: f64,
    pub rule: String,
    pub parallel: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            generation_interval_ms: 500,
            pattern: "demo".to_owned(),
            density: 0.3,
            rule: "B3/S23".to_owned(),
            parallel: false,
        }
    }
}

impl LifeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn generation_interval(&self) -> Duration {
        Duration::from_millis(self.generation_interval_ms)
    }

    /// Resolve `pattern` to seed coordinates; presets are centered on the board
    pub fn seed(&self) -> Result<Vec<(i64, i64)>, ConfigError> {
        match self.pattern.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(demo_seed()),
            "random" => Ok(random_seed(self.rows, self.cols, self.density, &mut rand::rng())),
            name => presets::by_name(name)
                .map(|p| p.centered_in(self.rows, self.cols))
                .ok_or_else(|| ConfigError::UnknownPattern(self.pattern.clone())),
        }
    }

    pub fn build_simulation(&self) -> Result<Simulation, ConfigError> {
        let rule = rule_from_str(&self.rule)?;
        // Validate dimensions before drawing a seed that spans the whole board
        let mut simulation = Simulation::with_rule(self.rows, self.cols, Vec::new(), rule)?;
        simulation.reseed(self.seed()?);
        Ok(simulation)
    }

    pub fn build_controller(&self) -> Result<Controller, ConfigError> {
        let ticker = Ticker::new(self.generation_interval());
        Ok(Controller::new(self.build_simulation()?, ticker).with_parallel(self.parallel))
    }
}
