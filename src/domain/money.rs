//! Monetary types for odds, stakes and commission rates.

use rust_decimal::Decimal;

/// Decimal odds (European format), always greater than 1.0 once validated.
pub type Odds = Decimal;

/// Stake, liability or profit in account currency.
pub type Money = Decimal;

/// Percentage expressed on a 0-100 scale (commission, extraction).
pub type Percent = Decimal;

/// Convert a 0-100 percentage into a fraction.
#[must_use]
pub fn pct_to_fraction(pct: Percent) -> Decimal {
    pct / Decimal::ONE_HUNDRED
}
