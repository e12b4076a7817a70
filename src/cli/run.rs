//! Handler for the `run` command.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

use crate::cli::{output, RunArgs};
use crate::config::Config;
use crate::domain::EvaluatedPair;
use crate::error::Result;
use crate::input::load_table;
use crate::pipeline::{self, ExchangeTable, RunReport, RunSummary};
use crate::report::{save_ranked, save_suspects};

#[derive(Tabled)]
struct RankedRow {
    #[tabled(rename = "Match")]
    label: String,
    #[tabled(rename = "Sel")]
    selection: String,
    #[tabled(rename = "Exch")]
    exchange: String,
    #[tabled(rename = "Extract%")]
    extraction: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Lay")]
    lay_stake: String,
    #[tabled(rename = "Liab")]
    liability: String,
    #[tabled(rename = "BO")]
    back: String,
    #[tabled(rename = "LO")]
    lay: String,
}

const LABEL_WIDTH: usize = 34;

impl From<&EvaluatedPair> for RankedRow {
    fn from(e: &EvaluatedPair) -> Self {
        Self {
            label: truncate(&e.pair.match_label, LABEL_WIDTH),
            selection: e.pair.selection.to_string(),
            exchange: e.pair.exchange_name.clone(),
            extraction: format!("{:.1}%", e.extraction_pct),
            profit: money(e.guaranteed_profit),
            lay_stake: money(e.lay_stake),
            liability: money(e.liability),
            back: money(e.pair.back_price),
            lay: money(e.pair.lay_price),
        }
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Apply CLI overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(dir) = &args.data_dir {
        config.inputs.dir = dir.clone();
    }
    if let Some(dir) = &args.out_dir {
        config.outputs.dir = Some(dir.clone());
    }
    if let Some(stake) = args.stake {
        config.ranking.stake = stake;
    }
    if let Some(min) = args.min_extraction {
        config.ranking.min_extraction_pct = min;
    }
    if let Some(top) = args.top {
        config.ranking.top_n = top;
    }
    if let Some(mode) = args.mode {
        config.ranking.mode = mode.into();
    }
    if let Some(threshold) = args.fuzzy {
        config.matching.fuzzy_threshold = Some(threshold);
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    info!(
        data_dir = %config.inputs.dir.display(),
        stake = %config.ranking.stake,
        mode = %config.ranking.mode,
        "freebet starting"
    );

    let bookmaker = load_table(&config.bookmaker_path())?;
    let mut exchanges = Vec::new();
    for (name, path) in config.exchange_paths() {
        exchanges.push(ExchangeTable {
            name,
            rows: load_table(&path)?,
        });
    }

    let report = pipeline::run(&bookmaker, &exchanges, &config.pipeline_options())?;

    let ranked_path = config.ranked_path();
    let suspects_path = config.suspects_path();
    save_ranked(&ranked_path, &report.ranked)?;
    let wrote_suspects = save_suspects(&suspects_path, &report.suspects)?;

    if args.json {
        print_json(&report, &config)?;
        return Ok(());
    }

    print_summary(&report.summary);
    output::section("Reports");
    if wrote_suspects {
        output::warn(&format!(
            "wrote {} suspect pairs to {}",
            report.suspects.len(),
            suspects_path.display()
        ));
    }
    output::ok(&format!(
        "wrote ranked top {} to {}",
        report.ranked.len(),
        ranked_path.display()
    ));

    print_ranked(&report.ranked, &config);
    Ok(())
}

fn print_summary(s: &RunSummary) {
    output::section("Run Summary");
    output::key_value(
        "Loaded rows",
        format!("bookmaker={} exchanges={}", s.bookmaker_rows, s.exchange_rows),
    );
    output::key_value(
        "Quotes (long)",
        format!("bookmaker={} exchanges={}", s.bookmaker_quotes, s.exchange_quotes),
    );
    if s.dropped_rows > 0 || s.dropped_cells > 0 {
        output::key_value(
            "Dropped",
            format!("rows={} cells={}", s.dropped_rows, s.dropped_cells),
        );
    }
    output::key_value("Exchange markets", s.markets);
    output::key_value(
        "Joined",
        format!(
            "{} (exact={} swapped={} fuzzy={}) unmatched={}",
            s.joined, s.joined_exact, s.joined_swapped, s.joined_fuzzy, s.unmatched
        ),
    );
    output::key_value(
        "Plausible",
        format!("{}   suspect={}", s.plausible, s.suspect),
    );
    output::key_value(
        "Evaluated",
        format!(
            "{}   excluded={} below threshold={}",
            s.evaluated, s.excluded, s.below_threshold
        ),
    );
}

fn print_ranked(rows: &[EvaluatedPair], config: &Config) {
    let title = match config.ranking.mode {
        crate::domain::ConversionMode::FreeBet => "Top Free Bet Conversions",
        crate::domain::ConversionMode::CashBet => "Top Qualifying Bets",
    };
    output::section(title);

    if rows.is_empty() {
        output::note("No opportunities met the threshold.");
        return;
    }

    let table = Table::new(rows.iter().map(RankedRow::from))
        .with(Style::rounded())
        .to_string();
    output::block(&table);
}

fn print_json(report: &RunReport, config: &Config) -> Result<()> {
    let value = json!({
        "mode": config.ranking.mode,
        "stake": config.ranking.stake,
        "summary": report.summary,
        "ranked": report.ranked,
        "suspects": report.suspects,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
