//! Per-exchange commission rates.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::domain::Percent;
use crate::error::{InputError, Result};

/// What to do with an exchange that has no configured rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownExchange {
    /// Assume 0% commission and log a warning. Overstates profit if the
    /// exchange really charges commission.
    #[default]
    Zero,
    /// Fail the run.
    Reject,
}

/// Commission charged on net lay winnings, keyed by exchange name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionTable {
    rates: BTreeMap<String, Percent>,
    unknown: UnknownExchange,
}

impl CommissionTable {
    pub fn new(unknown: UnknownExchange) -> Self {
        Self {
            rates: BTreeMap::new(),
            unknown,
        }
    }

    /// Add or replace an exchange's rate.
    #[must_use]
    pub fn with_rate(mut self, exchange: impl Into<String>, pct: Percent) -> Self {
        self.rates.insert(exchange.into(), pct);
        self
    }

    /// The configured rate, if any.
    pub fn get(&self, exchange: &str) -> Option<Percent> {
        self.rates.get(exchange).copied()
    }

    /// The rate to apply for `exchange`, honoring the unknown-exchange policy.
    pub fn resolve(&self, exchange: &str) -> Result<Percent> {
        if let Some(pct) = self.get(exchange) {
            return Ok(pct);
        }
        match self.unknown {
            UnknownExchange::Zero => {
                warn!(exchange, "no commission configured, assuming 0%");
                Ok(Percent::ZERO)
            }
            UnknownExchange::Reject => Err(InputError::UnknownExchange {
                name: exchange.to_string(),
            }
            .into()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Percent)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub const fn unknown_policy(&self) -> UnknownExchange {
        self.unknown
    }
}
