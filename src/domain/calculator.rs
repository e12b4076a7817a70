//! Matched-betting hedge arithmetic.
//!
//! A back bet at the bookmaker is hedged by a lay bet on the exchange so the
//! result is the same whichever way the match goes. Two conversions exist:
//!
//! - [`ConversionMode::FreeBet`] - the stake is a promotional token; a winning
//!   back bet pays net winnings only.
//! - [`ConversionMode::CashBet`] - a qualifying bet with real money; a winning
//!   back bet returns winnings plus stake.
//!
//! The guaranteed profit is the smaller of the two legs, since the hedge must
//! be solvent under both results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{pct_to_fraction, Money, Odds, Percent};

/// Which kind of back stake is being converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    /// Stake not returned on a winning back bet.
    #[default]
    FreeBet,
    /// Stake returned on a winning back bet.
    CashBet,
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FreeBet => f.write_str("free bet"),
            Self::CashBet => f.write_str("cash bet"),
        }
    }
}

/// Result of hedging one back bet with one lay bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Stake to place on the exchange lay bet.
    pub lay_stake: Money,
    /// Amount the lay bet loses if the selection wins.
    pub liability: Money,
    /// Net result if the back bet wins.
    pub back_profit: Money,
    /// Net result if the lay bet wins.
    pub lay_profit: Money,
    /// `min(back_profit, lay_profit)`.
    pub guaranteed_profit: Money,
    /// Guaranteed profit per unit of back stake.
    pub extraction_rate: Decimal,
}

impl Conversion {
    /// Extraction rate on a 0-100 scale.
    #[must_use]
    pub fn extraction_pct(&self) -> Percent {
        self.extraction_rate * Decimal::ONE_HUNDRED
    }
}

/// Compute the hedge for a back bet at `back_price` with `back_stake`, laid
/// at `lay_price` on an exchange charging `commission_pct` on net winnings.
pub fn compute(
    mode: ConversionMode,
    back_price: Odds,
    back_stake: Money,
    lay_price: Odds,
    commission_pct: Percent,
) -> Result<Conversion, DomainError> {
    if back_price <= Decimal::ONE {
        return Err(DomainError::InvalidOdds {
            side: "back",
            odds: back_price,
        });
    }
    if lay_price <= Decimal::ONE {
        return Err(DomainError::InvalidOdds {
            side: "lay",
            odds: lay_price,
        });
    }
    if back_stake <= Decimal::ZERO {
        return Err(DomainError::NonPositiveStake { stake: back_stake });
    }

    let commission = pct_to_fraction(commission_pct);
    let overflow = || DomainError::Overflow {
        back: back_price,
        lay: lay_price,
    };

    let denominator = lay_price.checked_sub(commission).ok_or_else(overflow)?;
    if denominator <= Decimal::ZERO {
        return Err(DomainError::NonPositiveDenominator {
            lay: lay_price,
            commission: commission_pct,
        });
    }
    if commission_pct < Decimal::ZERO || commission_pct >= Decimal::ONE_HUNDRED {
        return Err(DomainError::CommissionOutOfRange {
            commission: commission_pct,
        });
    }

    // Scraped odds are unbounded, so every step is checked.
    let back_win = back_price
        .checked_sub(Decimal::ONE)
        .and_then(|net| net.checked_mul(back_stake))
        .ok_or_else(overflow)?;
    let numerator = match mode {
        ConversionMode::FreeBet => back_win,
        ConversionMode::CashBet => back_price.checked_mul(back_stake).ok_or_else(overflow)?,
    };
    let lay_stake = numerator.checked_div(denominator).ok_or_else(overflow)?;
    let liability = lay_stake
        .checked_mul(lay_price - Decimal::ONE)
        .ok_or_else(overflow)?;
    let back_profit = back_win.checked_sub(liability).ok_or_else(overflow)?;
    let lay_return = lay_stake
        .checked_mul(Decimal::ONE - commission)
        .ok_or_else(overflow)?;
    let lay_profit = match mode {
        ConversionMode::FreeBet => lay_return,
        ConversionMode::CashBet => lay_return.checked_sub(back_stake).ok_or_else(overflow)?,
    };

    let guaranteed_profit = back_profit.min(lay_profit);
    let extraction_rate = guaranteed_profit
        .checked_div(back_stake)
        .ok_or_else(overflow)?;
    // extraction_pct() scales by 100 without a check
    extraction_rate
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(overflow)?;

    Ok(Conversion {
        lay_stake,
        liability,
        back_profit,
        lay_profit,
        guaranteed_profit,
        extraction_rate,
    })
}
