//! Run configuration loading and validation.
//!
//! Every section is optional; the defaults reproduce a plain run over
//! `CSV Files/` with Smarkets (2%) and Betfair (5%) as the exchanges.
//!
//! # Example
//!
//! ```no_run
//! use freebet::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("freebet.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

mod logging;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

pub use logging::LoggingConfig;

use crate::domain::Percent;
use crate::error::{ConfigError, Result};
use crate::pipeline::{
    CommissionTable, MatchOptions, PipelineOptions, PlausibilityBounds, RankingOptions,
    UnknownExchange,
};

/// Main run configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub inputs: InputsConfig,

    #[serde(default)]
    pub outputs: OutputsConfig,

    #[serde(default)]
    pub commission: CommissionConfig,

    #[serde(default)]
    pub ranking: RankingOptions,

    #[serde(default)]
    pub plausibility: PlausibilityBounds,

    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Where the source tables live.
#[derive(Debug, Clone, Deserialize)]
pub struct InputsConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Bookmaker table, relative to `dir`.
    #[serde(default = "default_bookmaker")]
    pub bookmaker: String,

    #[serde(default = "default_exchanges")]
    pub exchanges: Vec<ExchangeInput>,
}

/// One exchange table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExchangeInput {
    pub name: String,
    /// Table file, relative to the inputs dir.
    pub file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("CSV Files")
}

fn default_bookmaker() -> String {
    "skybet_scraper.csv".into()
}

fn default_exchanges() -> Vec<ExchangeInput> {
    vec![
        ExchangeInput {
            name: "Smarkets".into(),
            file: "smarkets_exchange_scraper.csv".into(),
        },
        ExchangeInput {
            name: "Betfair".into(),
            file: "betfair_exchange_scraper.csv".into(),
        },
    ]
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            bookmaker: default_bookmaker(),
            exchanges: default_exchanges(),
        }
    }
}

/// Where the reports go.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputsConfig {
    /// Defaults to the inputs dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_ranked")]
    pub ranked: String,

    #[serde(default = "default_suspects")]
    pub suspects: String,
}

fn default_ranked() -> String {
    "ranked_free_bets.csv".into()
}

fn default_suspects() -> String {
    "suspect_pairs.csv".into()
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            ranked: default_ranked(),
            suspects: default_suspects(),
        }
    }
}

/// Commission charged by each exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    #[serde(default)]
    pub unknown: UnknownExchange,

    #[serde(default = "default_rates")]
    pub rates: BTreeMap<String, Percent>,
}

fn default_rates() -> BTreeMap<String, Percent> {
    BTreeMap::from([("Smarkets".to_string(), dec!(2)), ("Betfair".to_string(), dec!(5))])
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            unknown: UnknownExchange::default(),
            rates: default_rates(),
        }
    }
}

impl CommissionConfig {
    pub fn table(&self) -> CommissionTable {
        self.rates
            .iter()
            .fold(CommissionTable::new(self.unknown), |t, (name, pct)| {
                t.with_rate(name.clone(), *pct)
            })
    }
}

/// Name matching settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MatchingConfig {
    /// Enables the fuzzy fallback when set.
    #[serde(default)]
    pub fuzzy_threshold: Option<f64>,
}

impl Config {
    /// Load and validate a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let r = &self.ranking;
        if r.stake <= Decimal::ZERO {
            return Err(invalid("stake", format!("must be positive, got {}", r.stake)));
        }
        if r.top_n == 0 {
            return Err(invalid("top_n", "must be at least 1".into()));
        }

        for (name, pct) in &self.commission.rates {
            if *pct < Decimal::ZERO || *pct >= Decimal::ONE_HUNDRED {
                return Err(invalid(
                    "commission.rates",
                    format!("{name} must be in [0, 100), got {pct}"),
                ));
            }
        }

        let p = &self.plausibility;
        if p.min_ratio <= Decimal::ZERO {
            return Err(invalid("min_ratio", format!("must be positive, got {}", p.min_ratio)));
        }
        if p.min_ratio > p.max_ratio {
            return Err(invalid(
                "max_ratio",
                format!("must be >= min_ratio ({} > {})", p.min_ratio, p.max_ratio),
            ));
        }

        if let Some(t) = self.matching.fuzzy_threshold {
            if !(t > 0.0 && t <= 1.0) {
                return Err(invalid("fuzzy_threshold", format!("must be in (0, 1], got {t}")));
            }
        }

        if self.inputs.bookmaker.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "bookmaker" }.into());
        }
        if self.inputs.exchanges.is_empty() {
            return Err(ConfigError::MissingField { field: "exchanges" }.into());
        }
        let mut seen = BTreeSet::new();
        for ex in &self.inputs.exchanges {
            if ex.name.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "exchanges.name" }.into());
            }
            if ex.file.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "exchanges.file" }.into());
            }
            if !seen.insert(ex.name.as_str()) {
                return Err(invalid("exchanges", format!("duplicate exchange '{}'", ex.name)));
            }
        }

        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }

    pub fn bookmaker_path(&self) -> PathBuf {
        self.inputs.dir.join(&self.inputs.bookmaker)
    }

    /// `(name, path)` for each exchange table.
    pub fn exchange_paths(&self) -> Vec<(String, PathBuf)> {
        self.inputs
            .exchanges
            .iter()
            .map(|ex| (ex.name.clone(), self.inputs.dir.join(&ex.file)))
            .collect()
    }

    fn output_dir(&self) -> &Path {
        self.outputs.dir.as_deref().unwrap_or(&self.inputs.dir)
    }

    pub fn ranked_path(&self) -> PathBuf {
        self.output_dir().join(&self.outputs.ranked)
    }

    pub fn suspects_path(&self) -> PathBuf {
        self.output_dir().join(&self.outputs.suspects)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            commissions: self.commission.table(),
            matching: MatchOptions {
                fuzzy_threshold: self.matching.fuzzy_threshold,
            },
            plausibility: self.plausibility,
            ranking: self.ranking,
        }
    }
}

fn invalid(field: &'static str, reason: String) -> crate::error::Error {
    ConfigError::InvalidValue { field, reason }.into()
}
