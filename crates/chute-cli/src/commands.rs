//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_bar_detail, output_bars, output_chutes, output_data_check, output_plan, DataCheckReport,
};
use chute_app::app::{plan_ride, PlanOptions};
use chute_app::config::Config;
use chute_app::repository::{open_catalog, open_catalog_at, read_catalog_at};
use chute_domain::Catalog;
use chute_infra::reference_loader::catalog_to_toml;
use chute_types::{BarType, Error, OutputFormat, Result, UnitSystem};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(units) = cli.units {
        config.units = units;
    }
    if let Some(ref data) = cli.data {
        config.reference_data = Some(data.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Plan {
            weights,
            wind,
            bar,
            no_bar,
            owned,
            all_chutes,
        } => {
            let bar = if no_bar { None } else { bar.or(config.default_bar) };
            let owned = if all_chutes {
                Vec::new()
            } else if owned.is_empty() {
                config.owned_chutes.clone()
            } else {
                owned
            };
            cmd_plan(&config, output_format, &weights, wind, bar, owned)
        }

        Commands::Chutes => {
            let catalog = open_catalog(&config)?;
            output_chutes(output_format, &catalog, config.units, &config.owned_chutes)
        }

        Commands::Bars { bar } => {
            let catalog = open_catalog(&config)?;
            match bar {
                Some(bar) => {
                    let spec = catalog.bar(bar).ok_or_else(|| {
                        Error::InvalidInput(format!("Bar {} is not in the reference data", bar))
                    })?;
                    output_bar_detail(output_format, spec)
                }
                None => output_bars(output_format, &catalog),
            }
        }

        Commands::CheckData { file, dump } => {
            let path = file.or_else(|| config.reference_data.clone());
            cmd_check_data(output_format, path, dump)
        }

        Commands::Config {
            show,
            set_units,
            set_bar,
            clear_bar,
            toggle_chute,
            reset_chutes,
            set_output,
            set_data,
            clear_data,
            reset,
        } => {
            let changes = ConfigChanges {
                set_units,
                set_bar,
                clear_bar,
                toggle_chute,
                reset_chutes,
                set_output,
                set_data,
                clear_data,
                reset,
            };
            cmd_config(show, changes)
        }
    }
}

fn cmd_plan(
    config: &Config,
    output_format: OutputFormat,
    weights: &[f64],
    wind: f64,
    bar: Option<BarType>,
    owned: Vec<f64>,
) -> Result<()> {
    let catalog = open_catalog(config)?;
    warn_unknown_sizes(&catalog, &owned);

    let mut options = PlanOptions::new()
        .with_units(config.units)
        .with_owned_chutes(owned);
    if let Some(bar) = bar {
        options = options.with_bar(bar);
    }

    let plan = plan_ride(&catalog, weights, wind, &options)?;
    output_plan(output_format, &plan)
}

fn warn_unknown_sizes(catalog: &Catalog, sizes: &[f64]) {
    for &size in sizes {
        if catalog.canopy(size).is_none() {
            log::warn!("owned chute size {} ft is not in the chart", size);
        }
    }
}

fn cmd_check_data(output_format: OutputFormat, path: Option<PathBuf>, dump: bool) -> Result<()> {
    let source = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string());

    // Validation failures are reported, not raised
    let catalog = read_catalog_at(path.as_deref())?;
    let report = DataCheckReport::new(&source, &catalog, catalog.issues());
    if !report.valid {
        output_data_check(output_format, &report)?;
        return Err(Error::ReferenceData(format!("{} failed validation", source)));
    }

    if dump {
        print!("{}", catalog_to_toml(&catalog)?);
        return Ok(());
    }

    output_data_check(output_format, &report)
}

/// Requested edits to the stored config
struct ConfigChanges {
    set_units: Option<UnitSystem>,
    set_bar: Option<BarType>,
    clear_bar: bool,
    toggle_chute: Vec<f64>,
    reset_chutes: bool,
    set_output: Option<OutputFormat>,
    set_data: Option<PathBuf>,
    clear_data: bool,
    reset: bool,
}

fn cmd_config(show: bool, changes: ConfigChanges) -> Result<()> {
    // Work on the stored config, not the one with CLI overrides applied
    let mut config = Config::load()?;
    let mut modified = false;

    if changes.reset {
        config = Config::default();
        modified = true;
        println!("Configuration reset to defaults");
    }

    if let Some(units) = changes.set_units {
        config.units = units;
        modified = true;
        println!("Units set to: {}", units);
    }

    if let Some(bar) = changes.set_bar {
        config.default_bar = Some(bar);
        modified = true;
        println!("Default bar set to: {}", bar);
    }

    if changes.clear_bar {
        config.default_bar = None;
        modified = true;
        println!("Default bar cleared");
    }

    if changes.reset_chutes {
        config.reset_owned_chutes();
        modified = true;
        println!("Owned chutes cleared (all chutes considered)");
    }

    if !changes.toggle_chute.is_empty() {
        let catalog = open_catalog(&config)?;
        for size in changes.toggle_chute {
            if catalog.canopy(size).is_none() {
                return Err(Error::InvalidInput(format!(
                    "No {} ft chute in the chart",
                    size
                )));
            }
            if config.toggle_owned_chute(size) {
                println!("Added {} ft to owned chutes", size);
            } else {
                println!("Removed {} ft from owned chutes", size);
            }
        }
        modified = true;
    }

    if let Some(format) = changes.set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if let Some(path) = changes.set_data {
        // Refuse files that would break every later command
        open_catalog_at(Some(&path))?;
        println!("Reference data set to: {}", path.display());
        config.reference_data = Some(path);
        modified = true;
    }

    if changes.clear_data {
        config.reference_data = None;
        modified = true;
        println!("Reference data reset to built-in charts");
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
