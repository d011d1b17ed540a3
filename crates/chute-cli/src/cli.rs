//! CLI definition using clap

use chute_types::{BarType, OutputFormat, UnitSystem};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chute-planner")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Parasail canopy selection and tow bar setup")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Units for input and display (imperial, metric). Uses config value if not specified.
    #[arg(long, short = 'u', global = true)]
    pub units: Option<UnitSystem>,

    /// Reference data file (TOML or JSON) replacing the built-in charts
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend canopies and work out the bar setup for a ride
    Plan {
        /// Passenger weight (lbs or kg); repeat for each passenger, 0 for an empty seat
        #[arg(long = "weight", short = 'w', required = true, num_args = 1..)]
        weights: Vec<f64>,

        /// Wind speed (mph or kph)
        #[arg(long)]
        wind: f64,

        /// Tow bar model. Uses the configured default bar if not specified.
        #[arg(long, short = 'b')]
        bar: Option<BarType>,

        /// Skip the bar setup even if a default bar is configured
        #[arg(long, conflicts_with = "bar")]
        no_bar: bool,

        /// Owned canopy size in feet; repeat for each. Overrides the configured set.
        #[arg(long = "owned", num_args = 1..)]
        owned: Vec<f64>,

        /// Consider every canopy, ignoring the configured owned set
        #[arg(long, conflicts_with = "owned")]
        all_chutes: bool,
    },

    /// List the canopy wind and weight chart
    Chutes,

    /// List tow bar models, or show one bar's setup tables
    Bars {
        /// Bar to show in detail
        #[arg(long, short = 'b')]
        bar: Option<BarType>,
    },

    /// Validate reference data
    CheckData {
        /// Data file to check. Uses --data or the configured file if not specified.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the checked charts as a TOML data file
        #[arg(long)]
        dump: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default units
        #[arg(long)]
        set_units: Option<UnitSystem>,

        /// Set default bar
        #[arg(long)]
        set_bar: Option<BarType>,

        /// Clear default bar
        #[arg(long, conflicts_with = "set_bar")]
        clear_bar: bool,

        /// Add a canopy size (ft) to the owned set, or remove it if already owned
        #[arg(long)]
        toggle_chute: Vec<f64>,

        /// Clear the owned set so every canopy is considered
        #[arg(long)]
        reset_chutes: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set reference data file
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// Go back to the built-in reference data
        #[arg(long, conflicts_with = "set_data")]
        clear_data: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
