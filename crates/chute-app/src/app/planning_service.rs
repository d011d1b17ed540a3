//! Ride Planning Service
//!
//! Runs both rule engines for one ride:
//! 1. Convert passenger weights and wind to lbs / mph
//! 2. Recommend canopies for the total weight, limited to owned sizes
//! 3. Configure the selected tow bar, if any
//! 4. Explain why no bar setup exists when the configurator finds none

use chute_domain::model::{BarSetupResult, CanopyRecommendation};
use chute_domain::Catalog;
use chute_types::{BarType, Error, Result, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::units::{weight_input_to_lbs, wind_input_to_mph};

/// Options for planning
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Tow bar to configure
    pub bar: Option<BarType>,

    /// Canopy sizes to choose from; empty means all
    pub owned_chutes: Vec<f64>,

    /// Units the weights and wind are given in
    pub units: UnitSystem,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar(mut self, bar: BarType) -> Self {
        self.bar = Some(bar);
        self
    }

    pub fn with_owned_chutes(mut self, sizes: Vec<f64>) -> Self {
        self.owned_chutes = sizes;
        self
    }

    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }
}

/// Why a bar setup was or was not produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BarStatus {
    NotSelected,
    Configured,
    /// The bar is missing from the loaded reference data
    UnknownBar { bar: BarType },
    UnsupportedPassengerCount { count: usize },
    NoTriplesTable { bar: BarType },
    /// The passengers' weight difference is outside every band
    NoMatchingBand { bar: BarType, max_diff: Option<f64> },
}

impl BarStatus {
    pub fn message(&self) -> String {
        match self {
            BarStatus::NotSelected => "No bar selected".to_string(),
            BarStatus::Configured => "Bar setup found".to_string(),
            BarStatus::UnknownBar { bar } => {
                format!("Bar {} is not in the reference data", bar)
            }
            BarStatus::UnsupportedPassengerCount { count } => format!(
                "Bar setup needs 2 or 3 passengers ({} entered)",
                count
            ),
            BarStatus::NoTriplesTable { bar } => {
                format!("{} has no setup for 3 passengers", bar)
            }
            BarStatus::NoMatchingBand { bar, max_diff } => match max_diff {
                Some(max) => format!(
                    "Weight difference is outside the {} chart (up to {} lbs in whole-pound bands)",
                    bar, max
                ),
                None => format!("Weight difference is outside the {} chart", bar),
            },
        }
    }
}

/// Result of planning one ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidePlan {
    pub units: UnitSystem,
    /// Passenger weights in lbs, in input order (empty seats kept as entered)
    pub passenger_weights_lbs: Vec<f64>,
    pub passenger_count: usize,
    pub total_weight_lbs: f64,
    pub wind_mph: f64,
    /// Owned-size filter that was applied; empty means all canopies
    pub owned_chutes: Vec<f64>,
    pub recommendations: Vec<CanopyRecommendation>,
    pub bar: Option<BarType>,
    pub bar_setup: Option<BarSetupResult>,
    pub bar_status: BarStatus,
}

impl RidePlan {
    pub fn best_recommendation(&self) -> Option<&CanopyRecommendation> {
        self.recommendations.first()
    }
}

/// Plan canopy and bar setup for one ride.
///
/// `weights` and `wind` are in `options.units`. Weights of zero are empty
/// seats. Negative or non-finite inputs are rejected.
pub fn plan_ride(catalog: &Catalog, weights: &[f64], wind: f64, options: &PlanOptions) -> Result<RidePlan> {
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(Error::InvalidInput(format!("Invalid passenger weight: {}", bad)));
    }
    if !wind.is_finite() || wind < 0.0 {
        return Err(Error::InvalidInput(format!("Invalid wind speed: {}", wind)));
    }

    let passenger_weights_lbs: Vec<f64> = weights
        .iter()
        .map(|&w| weight_input_to_lbs(w, options.units))
        .collect();
    let wind_mph = wind_input_to_mph(wind, options.units);

    let passenger_count = passenger_weights_lbs.iter().filter(|&&w| w > 0.0).count();
    let total_weight_lbs: f64 = passenger_weights_lbs.iter().filter(|&&w| w > 0.0).sum();

    let recommendations = catalog.recommend(total_weight_lbs, wind_mph, &options.owned_chutes);

    let (bar_setup, bar_status) = match options.bar {
        None => (None, BarStatus::NotSelected),
        Some(bar) => {
            let setup = catalog.configure(&passenger_weights_lbs, bar);
            let status = match setup {
                Some(_) => BarStatus::Configured,
                None => explain_missing_setup(catalog, bar, passenger_count),
            };
            (setup, status)
        }
    };

    log::info!(
        "planned {} passengers ({} lbs) at {:.1} mph: {} canopies, bar {}",
        passenger_count,
        total_weight_lbs,
        wind_mph,
        recommendations.len(),
        bar_status.message()
    );

    Ok(RidePlan {
        units: options.units,
        passenger_weights_lbs,
        passenger_count,
        total_weight_lbs,
        wind_mph,
        owned_chutes: options.owned_chutes.clone(),
        recommendations,
        bar: options.bar,
        bar_setup,
        bar_status,
    })
}

fn explain_missing_setup(catalog: &Catalog, bar: BarType, passenger_count: usize) -> BarStatus {
    let Some(spec) = catalog.bar(bar) else {
        return BarStatus::UnknownBar { bar };
    };
    match passenger_count {
        2 => BarStatus::NoMatchingBand {
            bar,
            max_diff: spec.max_doubles_diff(),
        },
        3 if !spec.supports_triples() => BarStatus::NoTriplesTable { bar },
        3 => BarStatus::NoMatchingBand {
            bar,
            max_diff: spec.max_triples_diff(),
        },
        count => BarStatus::UnsupportedPassengerCount { count },
    }
}
