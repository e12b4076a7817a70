//! Canonical market identity shared across odds sources.
//!
//! Bookmakers and exchanges spell the same fixture differently
//! ("Brighton & Hove Albion" vs "brighton  hove albion"). A [`MarketKey`]
//! reduces both team names to a canonical form so records from different
//! sources can be joined.

use std::fmt;

/// Canonicalize a team name.
///
/// Lower-cases, replaces every run of characters other than ASCII letters and
/// digits with a single space, and trims. Accents and abbreviations are left
/// alone, so "Man Utd" and "Manchester United" stay distinct.
#[must_use]
pub fn normalize_team(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Canonical `(home, away)` identifier of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarketKey {
    home: String,
    away: String,
}

impl MarketKey {
    /// Build a key from raw team names as quoted by a source.
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: normalize_team(home),
            away: normalize_team(away),
        }
    }

    /// The key of the same fixture listed the other way round.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn away(&self) -> &str {
        &self.away
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v {}", self.home, self.away)
    }
}
