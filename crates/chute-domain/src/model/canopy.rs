//! Canopy (chute) type definitions

use serde::{Deserialize, Serialize};

/// Tolerance used when matching canopy sizes from user input
const SIZE_TOLERANCE: f64 = 1e-6;

/// A/M zipper (vent flap) setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VentMode {
    Open,
    Closed,
}

impl VentMode {
    pub fn label(&self) -> &'static str {
        match self {
            VentMode::Open => "OPEN",
            VentMode::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for VentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Safe operating envelope for one canopy size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanopySpec {
    /// Canopy size in feet
    pub size: f64,
    /// Max wind (mph) with the A/M zipper closed
    pub max_wind_closed: f64,
    /// Max wind (mph) with the A/M zipper open
    pub max_wind_open: f64,
    /// Minimum total passenger weight (lbs)
    pub min_weight: f64,
    /// Maximum total passenger weight (lbs)
    pub max_weight: f64,
}

impl CanopySpec {
    /// Whether the total weight lies inside `[min_weight, max_weight]`
    pub fn accepts_weight(&self, total_weight: f64) -> bool {
        total_weight >= self.min_weight && total_weight <= self.max_weight
    }

    /// Vent setting for the given wind, preferring closed.
    ///
    /// Returns `None` when the wind exceeds the envelope even fully vented.
    pub fn vent_mode_for(&self, wind_speed: f64) -> Option<VentMode> {
        if wind_speed <= self.max_wind_closed {
            Some(VentMode::Closed)
        } else if wind_speed <= self.max_wind_open {
            Some(VentMode::Open)
        } else {
            None
        }
    }

    pub fn wind_limit(&self, mode: VentMode) -> f64 {
        match mode {
            VentMode::Closed => self.max_wind_closed,
            VentMode::Open => self.max_wind_open,
        }
    }

    pub fn is_size(&self, size: f64) -> bool {
        (self.size - size).abs() < SIZE_TOLERANCE
    }

    /// Problems with this entry, empty when the entry is usable
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !(self.size > 0.0) {
            issues.push(format!("{} ft: size must be positive", self.size));
        }
        if !(self.min_weight < self.max_weight) {
            issues.push(format!(
                "{} ft: min_weight {} must be below max_weight {}",
                self.size, self.min_weight, self.max_weight
            ));
        }
        if !(self.max_wind_closed > 0.0) {
            issues.push(format!("{} ft: max_wind_closed must be positive", self.size));
        }
        if !(self.max_wind_open >= self.max_wind_closed) {
            issues.push(format!(
                "{} ft: max_wind_open {} is below max_wind_closed {}",
                self.size, self.max_wind_open, self.max_wind_closed
            ));
        }
        issues
    }
}

/// A safe canopy for one query, with the vent setting to fly it in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanopyRecommendation {
    pub chute: CanopySpec,
    pub am_zipper: VentMode,
    pub reason: String,
    /// Fitness score used for ranking (higher is better)
    pub score: f64,
}
