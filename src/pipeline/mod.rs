//! The in-memory conversion pipeline.
//!
//! raw rows -> normalizer -> matcher -> plausibility filter -> calculator ->
//! ranking. No I/O happens here; callers load the tables and write the
//! reports.

pub mod commission;
pub mod matcher;
pub mod normalizer;
pub mod plausibility;
pub mod ranking;

use serde::Serialize;
use tracing::info;

pub use commission::{CommissionTable, UnknownExchange};
pub use matcher::{best_lay_per_market, join, BestLays, JoinOutcome, MatchOptions};
pub use normalizer::{longify_bookmaker, longify_exchange, parse_odds, Longified};
pub use plausibility::{classify, split, PlausibilityBounds, Verdict};
pub use ranking::{rank, Ranking, RankingOptions};

use crate::domain::{EvaluatedPair, FixtureRow, JoinKind, SuspectPair};
use crate::error::Result;

/// One exchange's table.
#[derive(Debug, Clone)]
pub struct ExchangeTable {
    pub name: String,
    pub rows: Vec<FixtureRow>,
}

/// Everything a run needs besides the tables.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub commissions: CommissionTable,
    pub matching: MatchOptions,
    pub plausibility: PlausibilityBounds,
    pub ranking: RankingOptions,
}

/// Counts at every stage, for judging data quality at a glance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub bookmaker_rows: usize,
    pub exchange_rows: usize,
    pub bookmaker_quotes: usize,
    pub exchange_quotes: usize,
    pub dropped_rows: usize,
    pub dropped_cells: usize,
    pub markets: usize,
    pub joined: usize,
    pub joined_exact: usize,
    pub joined_swapped: usize,
    pub joined_fuzzy: usize,
    pub unmatched: usize,
    pub plausible: usize,
    pub suspect: usize,
    pub evaluated: usize,
    pub excluded: usize,
    pub below_threshold: usize,
    pub reported: usize,
}

/// Output of one run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub ranked: Vec<EvaluatedPair>,
    pub suspects: Vec<SuspectPair>,
    pub summary: RunSummary,
}

/// Run the whole pipeline over already-loaded tables.
pub fn run(
    bookmaker: &[FixtureRow],
    exchanges: &[ExchangeTable],
    options: &PipelineOptions,
) -> Result<RunReport> {
    let mut summary = RunSummary {
        bookmaker_rows: bookmaker.len(),
        exchange_rows: exchanges.iter().map(|t| t.rows.len()).sum(),
        ..RunSummary::default()
    };

    let bookie = longify_bookmaker(bookmaker);
    let mut exchange = Longified::default();
    for table in exchanges {
        exchange.extend(longify_exchange(&table.rows, &table.name, &options.commissions)?);
    }
    summary.bookmaker_quotes = bookie.quotes.len();
    summary.exchange_quotes = exchange.quotes.len();
    summary.dropped_rows = bookie.dropped_rows + exchange.dropped_rows;
    summary.dropped_cells = bookie.dropped_cells + exchange.dropped_cells;

    let best = best_lay_per_market(&exchange.quotes);
    summary.markets = best.len();

    let joined = join(&bookie.quotes, &best, &options.matching);
    summary.joined = joined.pairs.len();
    summary.joined_exact = joined.count(|k| matches!(k, JoinKind::Exact));
    summary.joined_swapped = joined.count(|k| matches!(k, JoinKind::Swapped));
    summary.joined_fuzzy = joined.count(|k| matches!(k, JoinKind::Fuzzy { .. }));
    summary.unmatched = joined.unmatched;

    let (plausible, suspects) = split(joined.pairs, &options.plausibility);
    summary.plausible = plausible.len();
    summary.suspect = suspects.len();

    let ranking = rank(plausible, &options.ranking);
    summary.evaluated = ranking.evaluated;
    summary.excluded = ranking.excluded;
    summary.below_threshold = ranking.below_threshold;
    summary.reported = ranking.top.len();

    info!(
        joined = summary.joined,
        unmatched = summary.unmatched,
        plausible = summary.plausible,
        suspect = summary.suspect,
        reported = summary.reported,
        "pipeline complete"
    );

    Ok(RunReport {
        ranked: ranking.top,
        suspects,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Selection;
    use rust_decimal_macros::dec;

    #[test]
    fn run_counts_every_stage() {
        let bookmaker = vec![
            FixtureRow::new("Arsenal", "Chelsea")
                .back(Selection::Home, "2.50")
                .back(Selection::Draw, "3.40")
                .back(Selection::Away, "2.90"),
            FixtureRow::new("Leeds", "").back(Selection::Home, "2.0"),
            FixtureRow::new("Spurs", "Fulham").back(Selection::Home, "1.9"),
        ];
        let exchanges = vec![ExchangeTable {
            name: "Betfair".into(),
            rows: vec![FixtureRow::new("Arsenal", "Chelsea")
                .lay(Selection::Home, "2.40")
                .lay(Selection::Draw, "9.0")
                .lay(Selection::Away, "bad")],
        }];
        let options = PipelineOptions {
            commissions: CommissionTable::default().with_rate("Betfair", dec!(5)),
            ..PipelineOptions::default()
        };

        let report = run(&bookmaker, &exchanges, &options).unwrap();
        let s = &report.summary;

        assert_eq!(s.bookmaker_rows, 3);
        assert_eq!(s.exchange_rows, 1);
        assert_eq!(s.bookmaker_quotes, 4);
        assert_eq!(s.exchange_quotes, 2);
        assert_eq!(s.dropped_rows, 1);
        assert_eq!(s.dropped_cells, 3);
        assert_eq!(s.markets, 2);
        assert_eq!(s.joined, 2);
        assert_eq!(s.joined_exact, 2);
        assert_eq!(s.unmatched, 2);
        assert_eq!(s.plausible, 1);
        assert_eq!(s.suspect, 1);
        assert_eq!(s.reported, 1);
        assert_eq!(report.ranked[0].extraction_pct.round_dp(1), dec!(60.6));
        assert_eq!(report.suspects[0].pair.selection, Selection::Draw);
    }

    #[test]
    fn overflowing_cell_does_not_abort_the_run() {
        let huge = "50000000000000000000000000000";
        let bookmaker = vec![
            FixtureRow::new("Leeds", "Everton").back(Selection::Home, huge),
            FixtureRow::new("Arsenal", "Chelsea").back(Selection::Home, "2.50"),
        ];
        let exchanges = vec![ExchangeTable {
            name: "Betfair".into(),
            rows: vec![
                FixtureRow::new("Leeds", "Everton").lay(Selection::Home, huge),
                FixtureRow::new("Arsenal", "Chelsea").lay(Selection::Home, "2.40"),
            ],
        }];
        let options = PipelineOptions {
            commissions: CommissionTable::default().with_rate("Betfair", dec!(5)),
            ..PipelineOptions::default()
        };

        let report = run(&bookmaker, &exchanges, &options).unwrap();

        assert_eq!(report.summary.plausible, 2);
        assert_eq!(report.summary.excluded, 1);
        assert_eq!(report.ranked.len(), 1);
        assert_eq!(report.ranked[0].pair.match_label, "Arsenal vs Chelsea");
    }
}
