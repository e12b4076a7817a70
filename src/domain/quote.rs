//! Source records: wide fixture rows and long per-outcome quotes.

use serde::Deserialize;

use super::market::MarketKey;
use super::money::{Odds, Percent};
use super::selection::Selection;

/// One fixture as read from a source table: one row, many outcome columns.
///
/// Odds cells are kept as raw text; parsing happens during normalization so
/// a bad cell only costs that outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FixtureRow {
    #[serde(rename = "Home Team", default)]
    pub home_team: Option<String>,
    #[serde(rename = "Away Team", default)]
    pub away_team: Option<String>,

    #[serde(rename = "Home Back Odds", default)]
    pub home_back: Option<String>,
    #[serde(rename = "Draw Back Odds", default)]
    pub draw_back: Option<String>,
    #[serde(rename = "Away Back Odds", default)]
    pub away_back: Option<String>,

    #[serde(rename = "Home Lay Odds", default)]
    pub home_lay: Option<String>,
    #[serde(rename = "Draw Lay Odds", default)]
    pub draw_lay: Option<String>,
    #[serde(rename = "Away Lay Odds", default)]
    pub away_lay: Option<String>,
}

impl FixtureRow {
    /// Convenience constructor used by tests and in-memory callers.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home_team: Some(home.into()),
            away_team: Some(away.into()),
            ..Self::default()
        }
    }

    /// Set the back odds cell for a selection.
    #[must_use]
    pub fn back(mut self, selection: Selection, cell: impl Into<String>) -> Self {
        let cell = Some(cell.into());
        match selection {
            Selection::Home => self.home_back = cell,
            Selection::Draw => self.draw_back = cell,
            Selection::Away => self.away_back = cell,
        }
        self
    }

    /// Set the lay odds cell for a selection.
    #[must_use]
    pub fn lay(mut self, selection: Selection, cell: impl Into<String>) -> Self {
        let cell = Some(cell.into());
        match selection {
            Selection::Home => self.home_lay = cell,
            Selection::Draw => self.draw_lay = cell,
            Selection::Away => self.away_lay = cell,
        }
        self
    }

    pub fn back_cell(&self, selection: Selection) -> Option<&str> {
        match selection {
            Selection::Home => self.home_back.as_deref(),
            Selection::Draw => self.draw_back.as_deref(),
            Selection::Away => self.away_back.as_deref(),
        }
    }

    pub fn lay_cell(&self, selection: Selection) -> Option<&str> {
        match selection {
            Selection::Home => self.home_lay.as_deref(),
            Selection::Draw => self.draw_lay.as_deref(),
            Selection::Away => self.away_lay.as_deref(),
        }
    }

    /// Both team names, trimmed, or `None` if either is blank.
    pub fn teams(&self) -> Option<(&str, &str)> {
        let home = self.home_team.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let away = self.away_team.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((home, away))
    }
}

/// Where a quote came from.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteSource {
    /// Fixed-odds bookmaker (back side only).
    Bookmaker,
    /// Betting exchange lay side, with its commission on net winnings.
    Exchange { name: String, commission_pct: Percent },
}

/// One priced outcome of one fixture from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeQuote {
    pub home: String,
    pub away: String,
    pub selection: Selection,
    pub price: Odds,
    pub source: QuoteSource,
}

impl OutcomeQuote {
    pub fn market_key(&self) -> MarketKey {
        MarketKey::new(&self.home, &self.away)
    }

    /// Human-readable fixture label, in this source's spelling.
    pub fn match_label(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }

    pub fn exchange_name(&self) -> Option<&str> {
        match &self.source {
            QuoteSource::Exchange { name, .. } => Some(name),
            QuoteSource::Bookmaker => None,
        }
    }

    /// Exchange commission, zero for bookmaker quotes.
    pub fn commission_pct(&self) -> Percent {
        match &self.source {
            QuoteSource::Exchange { commission_pct, .. } => *commission_pct,
            QuoteSource::Bookmaker => Percent::ZERO,
        }
    }
}
