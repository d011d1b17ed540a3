//! Reference data catalog
//!
//! A `Catalog` is built once and only read afterwards, so it can be shared
//! across threads behind a plain reference or `Arc`.

use chute_types::{BarType, Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::{BarSetupResult, CanopyRecommendation, CanopySpec, TowBarSpec};
use crate::reference::{BAR_SPECS, CANOPY_SPECS};
use crate::service::{bar_configurator, canopy_selector};

/// Canopy and tow bar tables used for recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    canopies: Vec<CanopySpec>,
    bars: Vec<TowBarSpec>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(canopies: Vec<CanopySpec>, bars: Vec<TowBarSpec>) -> Self {
        Self { canopies, bars }
    }

    /// Catalog with the compiled-in tables
    pub fn builtin() -> Self {
        Self::new(CANOPY_SPECS.to_vec(), BAR_SPECS.to_vec())
    }

    pub fn canopies(&self) -> &[CanopySpec] {
        &self.canopies
    }

    pub fn bars(&self) -> &[TowBarSpec] {
        &self.bars
    }

    pub fn canopy_sizes(&self) -> Vec<f64> {
        self.canopies.iter().map(|c| c.size).collect()
    }

    pub fn canopy(&self, size: f64) -> Option<&CanopySpec> {
        self.canopies.iter().find(|c| c.is_size(size))
    }

    pub fn bar(&self, bar_type: BarType) -> Option<&TowBarSpec> {
        self.bars.iter().find(|b| b.id == bar_type)
    }

    /// Ranked canopy recommendations; see [`canopy_selector::recommend`]
    pub fn recommend(
        &self,
        total_weight: f64,
        wind_speed: f64,
        owned_sizes: &[f64],
    ) -> Vec<CanopyRecommendation> {
        canopy_selector::recommend(&self.canopies, total_weight, wind_speed, owned_sizes)
    }

    /// Bar setup for the given weights; `None` when the bar is not in this
    /// catalog or no setup applies. See [`bar_configurator::configure`].
    pub fn configure(&self, weights: &[f64], bar_type: BarType) -> Option<BarSetupResult> {
        let bar = self.bar(bar_type)?;
        bar_configurator::configure(weights, bar)
    }

    /// Every problem found in the tables
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.canopies.is_empty() {
            issues.push("no canopies defined".to_string());
        }
        for canopy in &self.canopies {
            issues.extend(canopy.validate());
        }
        for (i, canopy) in self.canopies.iter().enumerate() {
            if self.canopies[..i].iter().any(|c| c.is_size(canopy.size)) {
                issues.push(format!("{} ft: duplicate canopy size", canopy.size));
            }
        }

        for bar in &self.bars {
            issues.extend(bar.validate());
        }
        for (i, bar) in self.bars.iter().enumerate() {
            if self.bars[..i].iter().any(|b| b.id == bar.id) {
                issues.push(format!("{}: duplicate bar", bar.id));
            }
        }

        issues
    }

    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::ReferenceData(issues.join("; ")))
        }
    }
}
