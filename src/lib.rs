//! Freebet - matched-betting conversion finder.
//!
//! Joins a bookmaker's back odds with betting-exchange lay odds for the same
//! fixtures and ranks the bets by how much of a free bet (or qualifying bet)
//! can be locked in as guaranteed profit.
//!
//! # Modules
//!
//! - [`domain`] - Selections, quotes, market keys and the hedge calculator
//! - [`pipeline`] - Normalizer, matcher, plausibility filter and ranking
//! - [`input`] - CSV loading with missing-file diagnostics
//! - [`report`] - Ranked and suspect CSV artifacts
//! - [`config`] - TOML configuration
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use freebet::domain::{FixtureRow, Selection};
//! use freebet::pipeline::{self, CommissionTable, ExchangeTable, PipelineOptions};
//! use rust_decimal_macros::dec;
//!
//! let bookie = vec![FixtureRow::new("Arsenal", "Chelsea").back(Selection::Home, "2.50")];
//! let exchanges = vec![ExchangeTable {
//!     name: "Betfair".into(),
//!     rows: vec![FixtureRow::new("Arsenal", "Chelsea").lay(Selection::Home, "2.40")],
//! }];
//! let options = PipelineOptions {
//!     commissions: CommissionTable::default().with_rate("Betfair", dec!(5)),
//!     ..PipelineOptions::default()
//! };
//!
//! let report = pipeline::run(&bookie, &exchanges, &options).unwrap();
//! assert_eq!(report.ranked[0].extraction_pct.round_dp(1), dec!(60.6));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod report;
