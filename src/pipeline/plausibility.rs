//! Back/lay sanity check.
//!
//! Back and lay prices for the same outcome of the same fixture sit close
//! together at any given moment. A wide gap far more often means the join
//! hit the wrong market than that a real arbitrage exists, so such pairs are
//! set aside for review instead of being ranked.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::{JoinKind, JoinedPair, SuspectPair, SuspectReason};

/// Inclusive bounds on `LO / BO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlausibilityBounds {
    #[serde(default = "default_min_ratio")]
    pub min_ratio: Decimal,
    #[serde(default = "default_max_ratio")]
    pub max_ratio: Decimal,
}

fn default_min_ratio() -> Decimal {
    dec!(0.625)
}

fn default_max_ratio() -> Decimal {
    dec!(1.6)
}

impl Default for PlausibilityBounds {
    fn default() -> Self {
        Self {
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Plausible,
    Suspect(SuspectReason),
}

/// Classify one joined pair. Odds near 1.0 are not treated specially: heavy
/// favourites legitimately price there.
pub fn classify(pair: &JoinedPair, bounds: &PlausibilityBounds) -> Verdict {
    if let JoinKind::Fuzzy { score } = pair.join {
        return Verdict::Suspect(SuspectReason::FuzzyName { score });
    }

    let ratio = pair.price_ratio();
    if ratio >= bounds.min_ratio && ratio <= bounds.max_ratio {
        Verdict::Plausible
    } else {
        Verdict::Suspect(SuspectReason::PriceRatio { ratio })
    }
}

/// Partition pairs, preserving input order on both sides.
pub fn split(pairs: Vec<JoinedPair>, bounds: &PlausibilityBounds) -> (Vec<JoinedPair>, Vec<SuspectPair>) {
    let mut plausible = Vec::new();
    let mut suspects = Vec::new();

    for pair in pairs {
        match classify(&pair, bounds) {
            Verdict::Plausible => plausible.push(pair),
            Verdict::Suspect(reason) => suspects.push(SuspectPair { pair, reason }),
        }
    }

    (plausible, suspects)
}
