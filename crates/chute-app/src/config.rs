//! Configuration management for chute-planner
//!
//! Config stored at: ~/.config/chute-planner/config.json

use chute_types::{BarType, ConfigError, OutputFormat, Result, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Unit system for input and display
    #[serde(default)]
    pub units: UnitSystem,

    /// Bar used when none is given on the command line
    #[serde(default)]
    pub default_bar: Option<BarType>,

    /// Canopy sizes the operator owns; empty means all canopies
    #[serde(default)]
    pub owned_chutes: Vec<f64>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Reference data file replacing the built-in tables
    #[serde(default)]
    pub reference_data: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            default_bar: None,
            owned_chutes: Vec::new(),
            output_format: default_output_format(),
            reference_data: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("chute-planner");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Add the size to the owned set, or remove it if already owned.
    ///
    /// Returns true when the size is owned afterwards.
    pub fn toggle_owned_chute(&mut self, size: f64) -> bool {
        match self.owned_chutes.iter().position(|&s| (s - size).abs() < 1e-6) {
            Some(index) => {
                self.owned_chutes.remove(index);
                false
            }
            None => {
                self.owned_chutes.push(size);
                true
            }
        }
    }

    pub fn reset_owned_chutes(&mut self) {
        self.owned_chutes.clear();
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chute Planner Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Units:          {}", self.units)?;
        writeln!(
            f,
            "Default bar:    {}",
            self.default_bar
                .map(|b| b.to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        if self.owned_chutes.is_empty() {
            writeln!(f, "Owned chutes:   (all)")?;
        } else {
            let sizes: Vec<String> = self.owned_chutes.iter().map(|s| format!("{} ft", s)).collect();
            writeln!(f, "Owned chutes:   {}", sizes.join(", "))?;
        }
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Reference data: {}",
            self.reference_data
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
