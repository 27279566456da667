use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::calc::{self, CalcMode, Derivation, Layout, OutputUnits, SelectionError, VelocityMode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Calculator selections, usually loaded from a TOML file.
/// Missing keys fall back to the calculator's start-up state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub calc_mode: CalcMode,
    pub velocity_mode: VelocityMode,
    pub units: OutputUnits,
}

impl CalculatorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Override the modes from their selection names ("distance", "speed", ...)
    pub fn with_modes(
        mut self,
        calc_mode: Option<&str>,
        velocity_mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = calc_mode {
            self.calc_mode = name.parse()?;
        }
        if let Some(name) = velocity_mode {
            self.velocity_mode = name.parse()?;
        }
        Ok(self)
    }

    pub fn layout(&self) -> Layout {
        Layout::for_modes(self.calc_mode, self.velocity_mode)
    }

    pub fn derive(
        &self,
        distance: Option<&str>,
        time: Option<&str>,
        velocity: Option<&str>,
    ) -> Derivation {
        calc::derive(
            self.calc_mode,
            self.velocity_mode,
            distance,
            time,
            velocity,
            &self.units,
        )
    }
}
