//! Command-line interface definitions.

pub mod calc;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::domain::ConversionMode;

/// Rank free-bet and qualifying-bet conversions across a bookmaker and
/// betting exchanges.
#[derive(Parser, Debug)]
#[command(name = "freebet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join the odds tables, rank conversions and write the reports
    Run(RunArgs),

    /// Work out a single back/lay hedge
    Calc(CalcArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `freebet config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented config template
    Init(InitArgs),
    /// Print the effective configuration
    Show(ConfigPathArg),
    /// Check a configuration file
    Validate(ConfigPathArg),
}

/// Conversion mode as spelled on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// Free bet: stake not returned on a win
    FreeBet,
    /// Qualifying bet: stake returned on a win
    CashBet,
}

impl From<ModeArg> for ConversionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::FreeBet => Self::FreeBet,
            ModeArg::CashBet => Self::CashBet,
        }
    }
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the directory holding the input tables
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Override the directory the reports are written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Override the back stake
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Override the minimum extraction percentage to report
    #[arg(long, allow_hyphen_values = true)]
    pub min_extraction: Option<Decimal>,

    /// Override the number of rows to report
    #[arg(long)]
    pub top: Option<usize>,

    /// Override the conversion mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Enable the fuzzy team-name fallback with this similarity threshold
    #[arg(long)]
    pub fuzzy: Option<f64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Print the results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Bookmaker back odds (decimal)
    #[arg(long)]
    pub back: Decimal,

    /// Exchange lay odds (decimal)
    #[arg(long)]
    pub lay: Decimal,

    /// Back stake
    #[arg(long, default_value = "10")]
    pub stake: Decimal,

    /// Exchange commission in percent
    #[arg(long, default_value = "0")]
    pub commission: Decimal,

    /// Conversion mode
    #[arg(long, value_enum, default_value = "free-bet")]
    pub mode: ModeArg,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the template
    #[arg(default_value = "freebet.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
