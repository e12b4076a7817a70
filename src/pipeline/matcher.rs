//! Cross-source market matching.
//!
//! Exchange quotes are reduced to the best (lowest) lay price per
//! `(MarketKey, Selection)`. Each bookmaker quote is then joined to that map:
//!
//! 1. exact key,
//! 2. the same fixture listed away-first on the exchange, with the selection
//!    flipped,
//! 3. optionally, the closest fixture by team-name similarity. These joins
//!    are never ranked directly; the plausibility filter sends them to the
//!    suspect report.
//!
//! Everything iterates in a fixed order so repeated runs over the same input
//! produce identical pairs.

use std::collections::BTreeMap;

use strsim::jaro_winkler;
use tracing::{debug, trace};

use crate::domain::{JoinKind, JoinedPair, MarketKey, OutcomeQuote, Selection};

/// Best lay quote per market and selection.
pub type BestLays = BTreeMap<(MarketKey, Selection), OutcomeQuote>;

/// Keep the lowest-priced quote per `(MarketKey, Selection)`.
///
/// Ties are stable: the first quote seen keeps its place.
pub fn best_lay_per_market<'a, I>(quotes: I) -> BestLays
where
    I: IntoIterator<Item = &'a OutcomeQuote>,
{
    let mut best = BestLays::new();
    for quote in quotes {
        let key = (quote.market_key(), quote.selection);
        match best.get(&key) {
            Some(current) if quote.price >= current.price => {}
            _ => {
                best.insert(key, quote.clone());
            }
        }
    }
    best
}

/// Matching knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchOptions {
    /// Minimum mean Jaro-Winkler similarity for the fuzzy fallback.
    /// `None` disables it.
    pub fuzzy_threshold: Option<f64>,
}

/// Result of joining bookmaker quotes against the best lays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinOutcome {
    pub pairs: Vec<JoinedPair>,
    /// Bookmaker quotes with no exchange market.
    pub unmatched: usize,
}

impl JoinOutcome {
    pub fn count(&self, kind: fn(&JoinKind) -> bool) -> usize {
        self.pairs.iter().filter(|p| kind(&p.join)).count()
    }
}

/// Join every bookmaker quote to its best exchange lay.
pub fn join(bookmaker: &[OutcomeQuote], best: &BestLays, options: &MatchOptions) -> JoinOutcome {
    let mut out = JoinOutcome::default();
    let fuzzy_index = options.fuzzy_threshold.map(|_| FuzzyIndex::new(best));

    for quote in bookmaker {
        let key = quote.market_key();

        let found = best
            .get(&(key.clone(), quote.selection))
            .map(|ex| (ex, JoinKind::Exact))
            .or_else(|| {
                best.get(&(key.swapped(), quote.selection.flip()))
                    .map(|ex| (ex, JoinKind::Swapped))
            })
            .or_else(|| {
                let threshold = options.fuzzy_threshold?;
                let index = fuzzy_index.as_ref()?;
                index
                    .closest(&key, quote.selection, threshold)
                    .map(|(ex, score)| (ex, JoinKind::Fuzzy { score }))
            });

        let Some((exchange, join)) = found else {
            trace!(market = %key, selection = %quote.selection, "no exchange market");
            out.unmatched += 1;
            continue;
        };

        if !matches!(join, JoinKind::Exact) {
            debug!(
                bookmaker = %key,
                exchange = %exchange.market_key(),
                ?join,
                "joined on fallback"
            );
        }

        out.pairs.push(JoinedPair {
            match_label: quote.match_label(),
            selection: quote.selection,
            back_price: quote.price,
            lay_price: exchange.price,
            exchange_name: exchange.exchange_name().unwrap_or_default().to_string(),
            commission_pct: exchange.commission_pct(),
            join,
        });
    }

    out
}

/// Distinct exchange market keys, in key order, for similarity search.
struct FuzzyIndex<'a> {
    best: &'a BestLays,
    keys: Vec<&'a MarketKey>,
}

impl<'a> FuzzyIndex<'a> {
    fn new(best: &'a BestLays) -> Self {
        let mut keys: Vec<&MarketKey> = best.keys().map(|(k, _)| k).collect();
        keys.dedup();
        Self { best, keys }
    }

    /// Best lay for `selection` on the most similar exchange market, in
    /// either orientation, with its score. Markets that do not quote the
    /// selection are skipped. Ties keep the first candidate.
    fn closest(
        &self,
        key: &MarketKey,
        selection: Selection,
        threshold: f64,
    ) -> Option<(&'a OutcomeQuote, f64)> {
        let mut found: Option<(&'a OutcomeQuote, f64)> = None;

        for &candidate in &self.keys {
            let orientations = [
                (
                    name_similarity(key.home(), key.away(), candidate.home(), candidate.away()),
                    selection,
                ),
                (
                    name_similarity(key.home(), key.away(), candidate.away(), candidate.home()),
                    selection.flip(),
                ),
            ];

            for (score, sel) in orientations {
                if score < threshold || found.map_or(false, |(_, s)| score <= s) {
                    continue;
                }
                if let Some(quote) = self.best.get(&(candidate.clone(), sel)) {
                    found = Some((quote, score));
                }
            }
        }

        found
    }
}

/// Mean Jaro-Winkler similarity of both team names.
pub fn name_similarity(home_a: &str, away_a: &str, home_b: &str, away_b: &str) -> f64 {
    (jaro_winkler(home_a, home_b) + jaro_winkler(away_a, away_b)) / 2.0
}
