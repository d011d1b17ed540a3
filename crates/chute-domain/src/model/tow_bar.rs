//! Tow bar type definitions

use std::collections::BTreeMap;

use chute_types::BarType;
use serde::{Deserialize, Serialize};

use super::passenger::PassengerStrapAssignment;

/// Left/right strap positions a passenger clips into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrapPair {
    pub left: String,
    pub right: String,
}

impl StrapPair {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl std::fmt::Display for StrapPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.left, self.right)
    }
}

/// One row of a bar's setup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPositionRule {
    /// Fulcrum position number
    pub position: u8,
    /// Smallest weight difference (lbs) this row covers
    pub min_diff: f64,
    /// Largest weight difference (lbs) this row covers
    pub max_diff: f64,
    pub heavy_straps: StrapPair,
    pub light_straps: StrapPair,
    /// Only present in triples tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_straps: Option<StrapPair>,
}

impl BarPositionRule {
    pub fn contains(&self, weight_diff: f64) -> bool {
        weight_diff >= self.min_diff && weight_diff <= self.max_diff
    }
}

/// A tow bar model and its setup tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowBarSpec {
    pub id: BarType,
    pub name: String,
    pub display_name: String,
    /// Whether the bar has an adjustable fulcrum.
    ///
    /// Bars without one still carry a `position` per row; it is never shown.
    #[serde(default = "default_true")]
    pub has_fulcrum: bool,
    pub strap_positions: Vec<String>,
    /// Display colour per strap position
    #[serde(default)]
    pub position_colors: BTreeMap<String, String>,
    pub doubles_setup: Vec<BarPositionRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triples_setup: Option<Vec<BarPositionRule>>,
}

fn default_true() -> bool {
    true
}

impl TowBarSpec {
    pub fn supports_triples(&self) -> bool {
        self.triples_setup.as_ref().is_some_and(|rules| !rules.is_empty())
    }

    /// First doubles row whose band contains the difference
    pub fn doubles_rule(&self, weight_diff: f64) -> Option<&BarPositionRule> {
        self.doubles_setup.iter().find(|rule| rule.contains(weight_diff))
    }

    /// First triples row whose band contains the difference and that
    /// names middle straps
    pub fn triples_rule(&self, weight_diff: f64) -> Option<&BarPositionRule> {
        self.triples_setup
            .as_deref()?
            .iter()
            .find(|rule| rule.contains(weight_diff) && rule.middle_straps.is_some())
    }

    /// Largest weight difference the doubles table handles
    pub fn max_doubles_diff(&self) -> Option<f64> {
        self.doubles_setup.iter().map(|r| r.max_diff).reduce(f64::max)
    }

    /// Largest weight difference the triples table handles
    pub fn max_triples_diff(&self) -> Option<f64> {
        self.triples_setup
            .as_deref()?
            .iter()
            .map(|r| r.max_diff)
            .reduce(f64::max)
    }

    /// Problems with this bar's tables, empty when the bar is usable
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.doubles_setup.is_empty() {
            issues.push(format!("{}: doubles table is empty", self.id));
        }
        issues.extend(self.validate_table("doubles", &self.doubles_setup, false));
        if let Some(ref triples) = self.triples_setup {
            issues.extend(self.validate_table("triples", triples, true));
        }

        issues
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn validate_table(&self, label: &str, rules: &[BarPositionRule], triples: bool) -> Vec<String> {
        let mut issues = Vec::new();

        if let Some(first) = rules.first() {
            if !(first.min_diff <= 0.0) {
                issues.push(format!(
                    "{} {}: first band starts at {} instead of 0",
                    self.id, label, first.min_diff
                ));
            }
        }

        for (i, rule) in rules.iter().enumerate() {
            // Negated so NaN bounds are reported too
            let in_order = rule.min_diff >= 0.0 && rule.min_diff <= rule.max_diff;
            if !(in_order && rule.max_diff.is_finite()) {
                issues.push(format!(
                    "{} {} row {}: invalid band [{}, {}]",
                    self.id, label, i, rule.min_diff, rule.max_diff
                ));
            }
            if triples && rule.middle_straps.is_none() {
                issues.push(format!("{} {} row {}: missing middle straps", self.id, label, i));
            }

            let straps = [Some(&rule.heavy_straps), Some(&rule.light_straps), rule.middle_straps.as_ref()];
            for pair in straps.into_iter().flatten() {
                for strap in [&pair.left, &pair.right] {
                    if !self.strap_positions.contains(strap) {
                        issues.push(format!(
                            "{} {} row {}: unknown strap position {}",
                            self.id, label, i, strap
                        ));
                    }
                }
            }
        }

        // Bands are whole pounds; the next band must start right after the previous one
        for (i, pair) in rules.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if !(next.min_diff <= prev.max_diff + 1.0) {
                issues.push(format!(
                    "{} {} rows {}-{}: gap between {} and {}",
                    self.id,
                    label,
                    i,
                    i + 1,
                    prev.max_diff,
                    next.min_diff
                ));
            }
        }

        issues
    }
}

/// Setup for a given set of passengers on one bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSetupResult {
    pub bar_type: BarType,
    pub bar_spec: TowBarSpec,
    pub assignments: Vec<PassengerStrapAssignment>,
    /// Fulcrum setting from the matched row; meaningless when
    /// `bar_spec.has_fulcrum` is false
    pub fulcrum_position: u8,
    /// Weight difference (lbs) used for the table lookup
    pub weight_difference: f64,
    pub setup_rule: BarPositionRule,
}

impl BarSetupResult {
    /// Fulcrum setting, only for bars that have one
    pub fn fulcrum(&self) -> Option<u8> {
        self.bar_spec.has_fulcrum.then_some(self.fulcrum_position)
    }

    /// Which passengers (by input index) clip into each strap position
    pub fn strap_usage(&self) -> BTreeMap<String, Vec<usize>> {
        let mut usage: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for assignment in &self.assignments {
            for strap in [&assignment.straps.left, &assignment.straps.right] {
                usage
                    .entry(strap.clone())
                    .or_default()
                    .push(assignment.passenger_index);
            }
        }
        usage
    }
}
