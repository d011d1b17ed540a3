//! Canopy selection service
//!
//! Filters canopies by weight and wind envelope and ranks the survivors so
//! that conditions near the middle of a canopy's range come first.

use crate::model::{CanopyRecommendation, CanopySpec, VentMode};

const WEIGHT_FACTOR: f64 = 0.6;
const WIND_FACTOR: f64 = 0.4;
const CLOSED_BONUS: f64 = 0.1;

/// Recommend canopies for the given total weight (lbs) and wind (mph).
///
/// `owned_sizes` restricts candidates to those sizes; empty means every
/// canopy in `specs`. Results are sorted best first, keeping table order
/// on equal scores.
pub fn recommend(
    specs: &[CanopySpec],
    total_weight: f64,
    wind_speed: f64,
    owned_sizes: &[f64],
) -> Vec<CanopyRecommendation> {
    let mut recommendations: Vec<CanopyRecommendation> = specs
        .iter()
        .filter(|spec| owned_sizes.is_empty() || owned_sizes.iter().any(|&s| spec.is_size(s)))
        .filter(|spec| spec.accepts_weight(total_weight))
        .filter_map(|spec| {
            let mode = spec.vent_mode_for(wind_speed)?;
            Some(CanopyRecommendation {
                chute: *spec,
                am_zipper: mode,
                reason: recommendation_reason(spec, mode, wind_speed),
                score: fitness_score(spec, mode, total_weight, wind_speed),
            })
        })
        .collect();

    // sort_by is stable
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));

    log::debug!(
        "{} canopies fit {} lbs at {} mph (owned filter: {})",
        recommendations.len(),
        total_weight,
        wind_speed,
        owned_sizes.len()
    );

    recommendations
}

/// How well a canopy fits the conditions.
///
/// Each factor peaks at 1.0 mid-range and falls to 0.0 at either edge.
/// Weight counts 60%, wind 40%, and flying closed earns a 0.1 bonus.
pub fn fitness_score(spec: &CanopySpec, mode: VentMode, total_weight: f64, wind_speed: f64) -> f64 {
    let weight_position = (total_weight - spec.min_weight) / (spec.max_weight - spec.min_weight);
    let wind_position = wind_speed / spec.wind_limit(mode);

    let weight_score = 1.0 - (weight_position - 0.5).abs() * 2.0;
    let wind_score = 1.0 - (wind_position - 0.5).abs() * 2.0;
    let am_bonus = match mode {
        VentMode::Closed => CLOSED_BONUS,
        VentMode::Open => 0.0,
    };

    weight_score * WEIGHT_FACTOR + wind_score * WIND_FACTOR + am_bonus
}

fn recommendation_reason(spec: &CanopySpec, mode: VentMode, wind_speed: f64) -> String {
    match mode {
        VentMode::Closed => format!(
            "Wind speed {} mph is within safe range for A/M closed (max {} mph)",
            wind_speed, spec.max_wind_closed
        ),
        VentMode::Open => format!(
            "Wind speed {} mph requires A/M open (max {} mph)",
            wind_speed, spec.max_wind_open
        ),
    }
}
