//! Core types for parasail equipment planning

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Unit system used for input and display.
///
/// The rule engine always works in pounds and miles per hour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// lbs / mph
    #[default]
    Imperial,
    /// kg / kph
    Metric,
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Imperial => write!(f, "imperial"),
            UnitSystem::Metric => write!(f, "metric"),
        }
    }
}

/// Tow bar model identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarType {
    Doubleizer,
    DoubleizerSp,
    Multiflyer,
    MultiflyerAdv,
}

impl BarType {
    pub const ALL: [BarType; 4] = [
        BarType::Doubleizer,
        BarType::DoubleizerSp,
        BarType::Multiflyer,
        BarType::MultiflyerAdv,
    ];

    /// Identifier used in data files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BarType::Doubleizer => "doubleizer",
            BarType::DoubleizerSp => "doubleizer-sp",
            BarType::Multiflyer => "multiflyer",
            BarType::MultiflyerAdv => "multiflyer-adv",
        }
    }
}

impl std::fmt::Display for BarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        BarType::ALL
            .into_iter()
            .find(|bar| bar.as_str() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown bar type: {}", s)))
    }
}
