//! Domain validation errors.
//!
//! Returned when calculator inputs violate the invariants of decimal odds,
//! stakes and commission rates.
//!
//! # Examples
//!
//! ```
//! use freebet::domain::{compute, ConversionMode, DomainError};
//! use rust_decimal_macros::dec;
//!
//! // Odds of 1.0 or below can never be hedged
//! let result = compute(ConversionMode::FreeBet, dec!(1.0), dec!(10), dec!(2.0), dec!(2));
//! assert!(matches!(result, Err(DomainError::InvalidOdds { .. })));
//! ```

use thiserror::Error;

use super::money::{Money, Odds, Percent};

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Decimal odds must be strictly greater than 1.0.
    #[error("{side} odds must be greater than 1.0, got {odds}")]
    InvalidOdds {
        /// Which leg the odds belong to ("back" or "lay").
        side: &'static str,
        /// The rejected odds.
        odds: Odds,
    },

    /// Stake must be positive.
    #[error("stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The rejected stake.
        stake: Money,
    },

    /// Commission must lie in [0, 100).
    #[error("commission must be in [0, 100), got {commission}")]
    CommissionOutOfRange {
        /// The rejected commission percentage.
        commission: Percent,
    },

    /// The hedge denominator `LO - E/100` is zero or negative.
    #[error("lay odds {lay} minus commission fraction is not positive")]
    NonPositiveDenominator {
        /// The lay odds involved.
        lay: Odds,
        /// The commission percentage involved.
        commission: Percent,
    },

    /// An intermediate value left the representable decimal range.
    #[error("hedge for back {back} / lay {lay} overflows decimal range")]
    Overflow {
        /// The back odds involved.
        back: Odds,
        /// The lay odds involved.
        lay: Odds,
    },
}
