//! Source-agnostic matched-betting domain.

mod calculator;
mod market;
mod money;
mod pair;
mod quote;
mod selection;

pub mod error;

pub use calculator::{compute, Conversion, ConversionMode};
pub use error::DomainError;
pub use market::{normalize_team, MarketKey};
pub use money::{pct_to_fraction, Money, Odds, Percent};
pub use pair::{EvaluatedPair, JoinKind, JoinedPair, SuspectPair, SuspectReason};
pub use quote::{FixtureRow, OutcomeQuote, QuoteSource};
pub use selection::Selection;
