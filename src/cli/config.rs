//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../freebet.toml.example");

fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p),
        None => Ok(Config::default()),
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::ok("Created configuration file");
    output::key_value("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your tables and rates", path.display()));
    output::note(&format!("2. Run: freebet config validate -c {}", path.display()));
    output::note(&format!("3. Run: freebet run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;

    output::section("Inputs");
    output::key_value("Bookmaker", config.bookmaker_path().display());
    for (name, p) in config.exchange_paths() {
        output::key_value(&name, p.display());
    }

    output::section("Outputs");
    output::key_value("Ranked", config.ranked_path().display());
    output::key_value("Suspects", config.suspects_path().display());

    output::section("Commission");
    let table = config.commission.table();
    for (name, pct) in table.iter() {
        output::key_value(name, format!("{pct}%"));
    }
    output::key_value("Unknown", format!("{:?}", table.unknown_policy()).to_lowercase());

    output::section("Ranking");
    output::key_value("Mode", config.ranking.mode);
    output::key_value("Stake", config.ranking.stake);
    output::key_value("Min extraction", format!("{}%", config.ranking.min_extraction_pct));
    output::key_value("Top", config.ranking.top_n);

    output::section("Matching");
    output::key_value(
        "Plausible ratio",
        format!("{} - {}", config.plausibility.min_ratio, config.plausibility.max_ratio),
    );
    match config.matching.fuzzy_threshold {
        Some(t) => output::key_value("Fuzzy", format!("enabled (>= {t})")),
        None => output::key_value("Fuzzy", "disabled"),
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    output::section("Config Validation");
    if let Some(p) = path {
        output::key_value("Path", p.display());
    }

    let config = load(path)?;
    output::ok("Config is valid");

    let mut warnings = Vec::new();
    let table = config.commission.table();
    for ex in &config.inputs.exchanges {
        if table.get(&ex.name).is_none() {
            warnings.push(format!("no commission rate for {}", ex.name));
        }
    }
    if !config.bookmaker_path().exists() {
        warnings.push(format!(
            "bookmaker table not found at {}",
            config.bookmaker_path().display()
        ));
    }
    for (name, p) in config.exchange_paths() {
        if !p.exists() {
            warnings.push(format!("{name} table not found at {}", p.display()));
        }
    }

    if !warnings.is_empty() {
        output::section("Warnings");
        for w in &warnings {
            output::warn(w);
        }
    }
    Ok(())
}
