//! Joined back/lay pairs and their evaluated form.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculator::Conversion;
use super::money::{Money, Odds, Percent};
use super::selection::Selection;

/// How a bookmaker quote found its exchange market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum JoinKind {
    /// Same `(home, away)` key in both sources.
    Exact,
    /// The exchange lists the fixture with home and away reversed.
    Swapped,
    /// Names only matched approximately; `score` is the mean similarity.
    Fuzzy { score: f64 },
}

/// A bookmaker back price paired with the best exchange lay price for the
/// same outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedPair {
    pub match_label: String,
    pub selection: Selection,
    pub back_price: Odds,
    pub lay_price: Odds,
    pub exchange_name: String,
    pub commission_pct: Percent,
    pub join: JoinKind,
}

impl JoinedPair {
    /// `LO / BO`.
    pub fn price_ratio(&self) -> Decimal {
        self.lay_price / self.back_price
    }
}

/// Why a pair was routed to the audit file instead of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SuspectReason {
    /// Lay and back prices are too far apart to describe the same outcome.
    PriceRatio { ratio: Decimal },
    /// Team names matched only approximately.
    FuzzyName { score: f64 },
}

impl std::fmt::Display for SuspectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceRatio { ratio } => write!(f, "lay/back ratio {}", ratio.round_dp(3)),
            Self::FuzzyName { score } => write!(f, "fuzzy name match {score:.3}"),
        }
    }
}

/// A pair held back for manual review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuspectPair {
    #[serde(flatten)]
    pub pair: JoinedPair,
    pub reason: SuspectReason,
}

/// A plausible pair with the calculator applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatedPair {
    #[serde(flatten)]
    pub pair: JoinedPair,
    pub lay_stake: Money,
    pub liability: Money,
    pub back_profit: Money,
    pub lay_profit: Money,
    pub guaranteed_profit: Money,
    pub extraction_pct: Percent,
}

impl EvaluatedPair {
    pub fn new(pair: JoinedPair, conversion: &Conversion) -> Self {
        Self {
            pair,
            lay_stake: conversion.lay_stake,
            liability: conversion.liability,
            back_profit: conversion.back_profit,
            lay_profit: conversion.lay_profit,
            guaranteed_profit: conversion.guaranteed_profit,
            extraction_pct: conversion.extraction_pct(),
        }
    }
}
