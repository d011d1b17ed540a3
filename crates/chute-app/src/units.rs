//! Unit conversion and formatting
//!
//! Weights are stored in pounds and wind in miles per hour. Metric values
//! only exist at the edges, for input and display.

use chute_types::UnitSystem;

const KG_PER_LB: f64 = 0.453592;
const KPH_PER_MPH: f64 = 1.60934;

pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

pub fn mph_to_kph(mph: f64) -> f64 {
    mph * KPH_PER_MPH
}

pub fn kph_to_mph(kph: f64) -> f64 {
    kph / KPH_PER_MPH
}

/// Convert a weight entered in `units` to pounds
pub fn weight_input_to_lbs(value: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => value,
        UnitSystem::Metric => kg_to_lbs(value),
    }
}

/// Convert a wind speed entered in `units` to mph
pub fn wind_input_to_mph(value: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => value,
        UnitSystem::Metric => kph_to_mph(value),
    }
}

pub fn format_weight(lbs: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{} kg", lbs_to_kg(lbs).round()),
        UnitSystem::Imperial => format!("{} lbs", lbs.round()),
    }
}

pub fn format_speed(mph: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{} kph", mph_to_kph(mph).round()),
        UnitSystem::Imperial => format!("{} mph", mph.round()),
    }
}

pub fn format_weight_range(min_lbs: f64, max_lbs: f64, units: UnitSystem) -> String {
    format!("{} - {}", format_weight(min_lbs, units), format_weight(max_lbs, units))
}
