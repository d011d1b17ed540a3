//! Tow bar setup service
//!
//! Two passengers: the heavier one takes the heavy straps and the weight
//! difference picks the fulcrum row.
//!
//! Three passengers: the two closest in weight go on the outside, the
//! remaining one takes the middle seat, and the difference between the two
//! outside passengers picks the row.

use crate::model::{
    BarPositionRule, BarSetupResult, PassengerRole, PassengerStrapAssignment, StrapPair, TowBarSpec,
};

/// A present passenger and their position in the caller's list
#[derive(Debug, Clone, Copy)]
struct Rider {
    index: usize,
    weight: f64,
}

/// Calculate the strap and fulcrum setup for the given weights (lbs).
///
/// Weights of zero or below are empty seats. Returns `None` unless exactly
/// two or three passengers are present and the bar's table has a row for
/// their weight difference.
pub fn configure(weights: &[f64], bar: &TowBarSpec) -> Option<BarSetupResult> {
    let riders: Vec<Rider> = weights
        .iter()
        .enumerate()
        .filter(|(_, &weight)| weight > 0.0)
        .map(|(index, &weight)| Rider { index, weight })
        .collect();

    let result = match riders.as_slice() {
        [first, second] => configure_doubles(*first, *second, bar),
        [first, second, third] => configure_triples([*first, *second, *third], bar),
        _ => {
            log::debug!("{}: no setup for {} passengers", bar.id, riders.len());
            None
        }
    };

    if let Some(ref setup) = result {
        log::debug!(
            "{}: diff {} lbs -> position {}",
            bar.id,
            setup.weight_difference,
            setup.fulcrum_position
        );
    }

    result
}

fn configure_doubles(first: Rider, second: Rider, bar: &TowBarSpec) -> Option<BarSetupResult> {
    // On a tie the earlier passenger is treated as heavy
    let (heavy, light) = if first.weight >= second.weight {
        (first, second)
    } else {
        (second, first)
    };
    let weight_diff = (heavy.weight - light.weight).abs();

    let rule = bar.doubles_rule(weight_diff)?;

    let assignments = vec![
        assign(heavy, PassengerRole::Heavy, &rule.heavy_straps),
        assign(light, PassengerRole::Light, &rule.light_straps),
    ];

    Some(build_result(bar, assignments, weight_diff, rule))
}

fn configure_triples(mut riders: [Rider; 3], bar: &TowBarSpec) -> Option<BarSetupResult> {
    if !bar.supports_triples() {
        log::debug!("{}: no triples table", bar.id);
        return None;
    }

    // Stable, so equal weights keep input order
    riders.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    let [heaviest, middle, lightest] = riders;

    let upper_gap = heaviest.weight - middle.weight;
    let lower_gap = middle.weight - lightest.weight;

    let (outside_heavy, outside_light, middle_seat) = if upper_gap <= lower_gap {
        (heaviest, middle, lightest)
    } else {
        (middle, lightest, heaviest)
    };

    let weight_diff = (outside_heavy.weight - outside_light.weight).abs();

    let rule = bar.triples_rule(weight_diff)?;
    let middle_straps = rule.middle_straps.as_ref()?;

    let assignments = vec![
        assign(outside_heavy, PassengerRole::Heavy, &rule.heavy_straps),
        assign(middle_seat, PassengerRole::Middle, middle_straps),
        assign(outside_light, PassengerRole::Light, &rule.light_straps),
    ];

    Some(build_result(bar, assignments, weight_diff, rule))
}

fn assign(rider: Rider, role: PassengerRole, straps: &StrapPair) -> PassengerStrapAssignment {
    PassengerStrapAssignment {
        passenger_index: rider.index,
        weight: rider.weight,
        role,
        straps: straps.clone(),
    }
}

fn build_result(
    bar: &TowBarSpec,
    assignments: Vec<PassengerStrapAssignment>,
    weight_difference: f64,
    rule: &BarPositionRule,
) -> BarSetupResult {
    BarSetupResult {
        bar_type: bar.id,
        bar_spec: bar.clone(),
        assignments,
        fulcrum_position: rule.position,
        weight_difference,
        setup_rule: rule.clone(),
    }
}
