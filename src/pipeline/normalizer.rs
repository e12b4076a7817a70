//! Wide fixture rows to long per-outcome quotes.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::commission::CommissionTable;
use crate::domain::{FixtureRow, Odds, OutcomeQuote, QuoteSource, Selection};
use crate::error::Result;

/// Quotes produced from one source table, plus what had to be thrown away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Longified {
    pub quotes: Vec<OutcomeQuote>,
    /// Rows discarded because a team name was blank.
    pub dropped_rows: usize,
    /// Odds cells discarded because they were blank or not valid odds.
    pub dropped_cells: usize,
}

impl Longified {
    /// Append another source's output.
    pub fn extend(&mut self, other: Longified) {
        self.quotes.extend(other.quotes);
        self.dropped_rows += other.dropped_rows;
        self.dropped_cells += other.dropped_cells;
    }
}

/// Parse a decimal-odds cell. Anything that is not a number greater than 1.0
/// yields `None`.
pub fn parse_odds(cell: &str) -> Option<Odds> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    Decimal::from_str(cell)
        .or_else(|_| Decimal::from_scientific(cell))
        .ok()
        .filter(|odds| *odds > Decimal::ONE)
}

#[derive(Clone, Copy)]
enum Side {
    Back,
    Lay,
}

fn longify(rows: &[FixtureRow], side: Side, source: &QuoteSource) -> Longified {
    let mut out = Longified::default();

    for (idx, row) in rows.iter().enumerate() {
        let Some((home, away)) = row.teams() else {
            debug!(row = idx, "dropping row with blank team name");
            out.dropped_rows += 1;
            continue;
        };

        for selection in Selection::ALL {
            let cell = match side {
                Side::Back => row.back_cell(selection),
                Side::Lay => row.lay_cell(selection),
            };
            match cell.and_then(parse_odds) {
                Some(price) => out.quotes.push(OutcomeQuote {
                    home: home.to_string(),
                    away: away.to_string(),
                    selection,
                    price,
                    source: source.clone(),
                }),
                None => {
                    debug!(row = idx, %selection, cell = ?cell, "dropping unusable odds cell");
                    out.dropped_cells += 1;
                }
            }
        }
    }

    out
}

/// Bookmaker rows: back odds become one quote per priced outcome.
pub fn longify_bookmaker(rows: &[FixtureRow]) -> Longified {
    longify(rows, Side::Back, &QuoteSource::Bookmaker)
}

/// Exchange rows: lay odds become one quote per priced outcome, tagged with
/// the exchange and its commission.
pub fn longify_exchange(
    rows: &[FixtureRow],
    exchange_name: &str,
    commissions: &CommissionTable,
) -> Result<Longified> {
    let commission_pct = commissions.resolve(exchange_name)?;
    let source = QuoteSource::Exchange {
        name: exchange_name.to_string(),
        commission_pct,
    };
    Ok(longify(rows, Side::Lay, &source))
}
