use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tahara restricted-day calculator.
#[derive(Parser)]
#[command(
    name = "tahara",
    version,
    about = "Restricted-day calculator on the Hebrew calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML settings file.
    #[arg(short, long, global = true, default_value = "tahara.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute restricted days for every date in an input file.
    Calculate(CalculateArgs),
    /// Manage date files.
    #[command(subcommand)]
    Dates(DatesCommand),
    /// Inspect or create the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `calculate` subcommand.
#[derive(clap::Args)]
pub struct CalculateArgs {
    /// Override the input date file from settings.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write results to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text or json.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// `dates` subcommands.
#[derive(Subcommand)]
pub enum DatesCommand {
    /// Append a date to a date file, creating it if needed.
    Add {
        /// Date file to append to.
        file: PathBuf,
        /// Date: d/m/y (Hebrew), DD/MM/YYYY, DD-MM-YYYY, YYYY-MM-DD or `today`.
        date: String,
        /// 0 for night, 1 for day.
        qualifier: String,
    },
    /// List the dates in a file with their Gregorian equivalents.
    List {
        /// Date file; defaults to the configured input file.
        file: Option<PathBuf>,
    },
    /// Show the Hebrew and Gregorian forms of one date.
    Convert {
        /// Date in any accepted form.
        date: String,
        /// 0 for night, 1 for day (default 1).
        qualifier: Option<String>,
    },
}

/// `config` subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings as TOML.
    Show,
    /// Write the default settings file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
