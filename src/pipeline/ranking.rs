//! Evaluation and ranking of plausible pairs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{compute, ConversionMode, EvaluatedPair, JoinedPair, Money, Percent};

/// Ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RankingOptions {
    /// Back stake being converted.
    #[serde(default = "default_stake")]
    pub stake: Money,

    /// Pairs extracting less than this (0-100) are not reported.
    #[serde(default)]
    pub min_extraction_pct: Percent,

    /// Maximum number of rows to report.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    #[serde(default)]
    pub mode: ConversionMode,
}

fn default_stake() -> Money {
    dec!(10)
}

const fn default_top_n() -> usize {
    10
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            stake: default_stake(),
            min_extraction_pct: Decimal::ZERO,
            top_n: default_top_n(),
            mode: ConversionMode::default(),
        }
    }
}

/// Ranked output plus what fell out along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub top: Vec<EvaluatedPair>,
    /// Pairs the calculator accepted.
    pub evaluated: usize,
    /// Pairs the calculator rejected.
    pub excluded: usize,
    /// Evaluated pairs under the extraction threshold.
    pub below_threshold: usize,
}

/// Evaluate, filter, sort (stable, highest extraction first) and truncate.
pub fn rank(pairs: Vec<JoinedPair>, options: &RankingOptions) -> Ranking {
    let mut ranking = Ranking::default();
    let mut kept = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let conversion = match compute(
            options.mode,
            pair.back_price,
            options.stake,
            pair.lay_price,
            pair.commission_pct,
        ) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    market = %pair.match_label,
                    selection = %pair.selection,
                    error = %e,
                    "excluding pair from ranking"
                );
                ranking.excluded += 1;
                continue;
            }
        };
        ranking.evaluated += 1;

        let evaluated = EvaluatedPair::new(pair, &conversion);
        if evaluated.extraction_pct < options.min_extraction_pct {
            ranking.below_threshold += 1;
            continue;
        }
        kept.push(evaluated);
    }

    kept.sort_by(|a, b| b.extraction_pct.cmp(&a.extraction_pct));
    kept.truncate(options.top_n);
    ranking.top = kept;
    ranking
}
