//! Output formatting module

use std::fmt;

use chute_app::app::{BarStatus, RidePlan};
use chute_app::units::{format_speed, format_weight, format_weight_range};
use chute_domain::model::{BarPositionRule, TowBarSpec};
use chute_domain::Catalog;
use chute_types::{OutputFormat, Result, UnitSystem};
use serde::Serialize;

/// Outcome of `check-data`
#[derive(Debug, Serialize)]
pub struct DataCheckReport {
    pub source: String,
    pub valid: bool,
    pub canopies: usize,
    pub bars: usize,
    pub issues: Vec<String>,
}

impl DataCheckReport {
    pub fn new(source: &str, catalog: &Catalog, issues: Vec<String>) -> Self {
        Self {
            source: source.to_string(),
            valid: issues.is_empty(),
            canopies: catalog.canopies().len(),
            bars: catalog.bars().len(),
            issues,
        }
    }
}

pub fn output_plan(output_format: OutputFormat, plan: &RidePlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        print!("{}", PlanTable(plan));
    }
    Ok(())
}

/// Table view of a ride plan
pub struct PlanTable<'a>(pub &'a RidePlan);

impl fmt::Display for PlanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let units = plan.units;

        writeln!(f, "\nRide Plan")?;
        writeln!(f, "=========")?;
        writeln!(
            f,
            "Passengers:  {} ({} total)",
            plan.passenger_count,
            format_weight(plan.total_weight_lbs, units)
        )?;
        writeln!(f, "Wind:        {}", format_speed(plan.wind_mph, units))?;
        if plan.owned_chutes.is_empty() {
            writeln!(f, "Chutes:      all")?;
        } else {
            let sizes: Vec<String> = plan.owned_chutes.iter().map(|s| format!("{} ft", s)).collect();
            writeln!(f, "Chutes:      {}", sizes.join(", "))?;
        }

        writeln!(f, "\n--- Canopies ---")?;
        if plan.recommendations.is_empty() {
            writeln!(f, "No canopy fits this weight and wind.")?;
        }
        for (rank, rec) in plan.recommendations.iter().enumerate() {
            writeln!(
                f,
                "{:>2}. {:>5} ft  {:<6}  score {:.2}  ({})",
                rank + 1,
                rec.chute.size,
                rec.am_zipper.label(),
                rec.score,
                format_weight_range(rec.chute.min_weight, rec.chute.max_weight, units)
            )?;
            writeln!(f, "    {}", rec.reason)?;
        }

        if plan.bar_status == BarStatus::NotSelected {
            return Ok(());
        }

        writeln!(f, "\n--- Bar Setup ---")?;
        let Some(ref setup) = plan.bar_setup else {
            return writeln!(f, "{}", plan.bar_status.message());
        };

        writeln!(f, "Bar:         {}", setup.bar_spec.display_name)?;
        if let Some(fulcrum) = setup.fulcrum() {
            writeln!(f, "Fulcrum:     position {}", fulcrum)?;
        }
        writeln!(f, "Difference:  {}", format_weight(setup.weight_difference, units))?;
        for assignment in &setup.assignments {
            writeln!(
                f,
                "  {:<9} #{} {:>8}  straps {}",
                assignment.role.label(),
                assignment.passenger_index + 1,
                format_weight(assignment.weight, units),
                assignment.straps
            )?;
        }
        writeln!(f, "Strap usage:")?;
        for (strap, passengers) in setup.strap_usage() {
            let riders: Vec<String> = passengers.iter().map(|i| format!("#{}", i + 1)).collect();
            writeln!(f, "  {:<8} {}", strap, riders.join(", "))?;
        }
        Ok(())
    }
}

pub fn output_chutes(
    output_format: OutputFormat,
    catalog: &Catalog,
    units: UnitSystem,
    owned: &[f64],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.canopies())?);
    } else {
        print!("{}", ChuteTable { catalog, units, owned });
    }
    Ok(())
}

/// Canopy chart in the display units, owned sizes starred
pub struct ChuteTable<'a> {
    pub catalog: &'a Catalog,
    pub units: UnitSystem,
    pub owned: &'a [f64],
}

impl fmt::Display for ChuteTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<3} {:>6}  {:>10}  {:>10}  {:<20}", "", "Size", "Closed", "Open", "Weight")?;
        writeln!(f, "{}", "-".repeat(56))?;
        for spec in self.catalog.canopies() {
            let marker = if self.owned.iter().any(|&s| spec.is_size(s)) { "*" } else { "" };
            writeln!(
                f,
                "{:<3} {:>3} ft  {:>10}  {:>10}  {:<20}",
                marker,
                spec.size,
                format_speed(spec.max_wind_closed, self.units),
                format_speed(spec.max_wind_open, self.units),
                format_weight_range(spec.min_weight, spec.max_weight, self.units)
            )?;
        }
        if !self.owned.is_empty() {
            writeln!(f, "\n* owned")?;
        }
        Ok(())
    }
}

pub fn output_bars(output_format: OutputFormat, catalog: &Catalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.bars())?);
    } else {
        print!("{}", BarTable(catalog));
    }
    Ok(())
}

/// One line per bar model
pub struct BarTable<'a>(pub &'a Catalog);

impl fmt::Display for BarTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:<24} {:<8} {:>10} {:>10}", "ID", "Name", "Fulcrum", "Doubles", "Triples")?;
        writeln!(f, "{}", "-".repeat(72))?;
        for bar in self.0.bars() {
            let range = |max: Option<f64>| match max {
                Some(max) => format!("0-{}", max),
                None => "-".to_string(),
            };
            writeln!(
                f,
                "{:<16} {:<24} {:<8} {:>10} {:>10}",
                bar.id.as_str(),
                bar.display_name,
                if bar.has_fulcrum { "yes" } else { "no" },
                range(bar.max_doubles_diff()),
                range(bar.max_triples_diff())
            )?;
        }
        writeln!(f, "\nDoubles/Triples: weight difference covered (lbs)")
    }
}

pub fn output_bar_detail(output_format: OutputFormat, spec: &TowBarSpec) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(spec)?);
    } else {
        print!("{}", BarDetail(spec));
    }
    Ok(())
}

/// A bar's doubles and triples tables
pub struct BarDetail<'a>(pub &'a TowBarSpec);

impl fmt::Display for BarDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.0;
        writeln!(f, "\n{} ({})", spec.display_name, spec.id)?;
        writeln!(f, "Straps: {}", spec.strap_positions.join(", "))?;

        writeln!(f, "\nDoubles")?;
        write_rules(f, spec, &spec.doubles_setup, false)?;

        if let Some(ref triples) = spec.triples_setup {
            writeln!(f, "\nTriples")?;
            write_rules(f, spec, triples, true)?;
        }
        Ok(())
    }
}

fn write_rules(
    f: &mut fmt::Formatter<'_>,
    spec: &TowBarSpec,
    rules: &[BarPositionRule],
    triples: bool,
) -> fmt::Result {
    let position = if spec.has_fulcrum { "Pos" } else { "" };
    write!(f, "{:<4} {:>11}  {:<14}", position, "Diff (lbs)", "Heavy")?;
    if triples {
        write!(f, "{:<14}", "Middle")?;
    }
    writeln!(f, "{:<14}", "Light")?;

    for rule in rules {
        let position = if spec.has_fulcrum { rule.position.to_string() } else { String::new() };
        write!(
            f,
            "{:<4} {:>11}  {:<14}",
            position,
            format!("{}-{}", rule.min_diff, rule.max_diff),
            rule.heavy_straps.to_string()
        )?;
        if triples {
            let middle = rule
                .middle_straps
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            write!(f, "{:<14}", middle)?;
        }
        writeln!(f, "{:<14}", rule.light_straps.to_string())?;
    }
    Ok(())
}

pub fn output_data_check(output_format: OutputFormat, report: &DataCheckReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

impl fmt::Display for DataCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reference data: {}", self.source)?;
        if self.valid {
            writeln!(f, "OK: {} canopies, {} bars", self.canopies, self.bars)
        } else {
            writeln!(f, "{} issue(s):", self.issues.len())?;
            for issue in &self.issues {
                writeln!(f, "  - {}", issue)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chute_app::app::{plan_ride, PlanOptions};
    use chute_types::BarType;

    fn plan(weights: &[f64], wind: f64, bar: Option<BarType>) -> RidePlan {
        let mut options = PlanOptions::new();
        if let Some(bar) = bar {
            options = options.with_bar(bar);
        }
        plan_ride(&Catalog::builtin(), weights, wind, &options).unwrap()
    }

    #[test]
    fn test_plan_lists_ranked_canopies() {
        let text = PlanTable(&plan(&[180.0, 120.0], 10.0, None)).to_string();
        assert!(text.contains("Passengers:  2 (300 lbs total)"));
        assert!(text.contains(" 1. "));
        assert!(text.contains("35 ft"));
        assert!(!text.contains("Bar Setup"));
    }

    #[test]
    fn test_plan_hides_fulcrum_for_doubleizer() {
        let text = PlanTable(&plan(&[150.0, 100.0], 10.0, Some(BarType::Doubleizer))).to_string();
        assert!(text.contains("Bar Setup"));
        assert!(!text.contains("Fulcrum:"));
        assert!(text.contains("Heaviest"));
        assert!(text.contains("Lightest"));
    }

    #[test]
    fn test_plan_shows_fulcrum_for_multiflyer() {
        let text = PlanTable(&plan(&[150.0, 145.0, 100.0], 10.0, Some(BarType::Multiflyer))).to_string();
        assert!(text.contains("Fulcrum:     position"));
        assert!(text.contains("Middle"));
        assert!(text.contains("Strap usage:"));
    }

    #[test]
    fn test_plan_explains_missing_setup() {
        let text = PlanTable(&plan(&[300.0, 100.0], 10.0, Some(BarType::Doubleizer))).to_string();
        assert!(text.contains("outside the doubleizer chart"));
    }

    #[test]
    fn test_plan_metric_display() {
        let options = PlanOptions::new().with_units(UnitSystem::Metric);
        let plan = plan_ride(&Catalog::builtin(), &[80.0, 60.0], 16.0, &options).unwrap();
        let text = PlanTable(&plan).to_string();
        assert!(text.contains(" kg total"));
        assert!(text.contains("16 kph"));
    }

    #[test]
    fn test_chutes_marks_owned() {
        let catalog = Catalog::builtin();
        let text = ChuteTable {
            catalog: &catalog,
            units: UnitSystem::Imperial,
            owned: &[35.0],
        }
        .to_string();
        let line = text.lines().find(|l| l.contains("35 ft")).unwrap();
        assert!(line.starts_with('*'));
        assert!(text.contains("* owned"));
    }

    #[test]
    fn test_bars_table() {
        let text = BarTable(&Catalog::builtin()).to_string();
        assert!(text.contains("doubleizer-sp"));
        assert!(text.contains("multiflyer-adv"));
    }

    #[test]
    fn test_bar_detail_triples_section() {
        let catalog = Catalog::builtin();
        let doubleizer = BarDetail(catalog.bar(BarType::Doubleizer).unwrap()).to_string();
        assert!(!doubleizer.contains("Triples"));
        let multiflyer = BarDetail(catalog.bar(BarType::Multiflyer).unwrap()).to_string();
        assert!(multiflyer.contains("Triples"));
        assert!(multiflyer.contains("Middle"));
    }

    #[test]
    fn test_data_check_report() {
        let catalog = Catalog::builtin();
        let ok = DataCheckReport::new("(built-in)", &catalog, Vec::new());
        assert!(ok.valid);
        assert!(ok.to_string().contains("OK: 25 canopies, 4 bars"));

        // Messages are kept whole, separators included
        let issue = "46 ft: min_weight 700; max_weight 650".to_string();
        let bad = DataCheckReport::new("chart.toml", &catalog, vec![issue.clone()]);
        assert!(!bad.valid);
        assert_eq!(bad.issues, vec![issue]);
        assert!(bad.to_string().contains("1 issue(s)"));
    }
}
