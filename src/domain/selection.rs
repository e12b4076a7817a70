//! Full-time result selections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One outcome of a three-way (1X2) match market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Selection {
    Home,
    Draw,
    Away,
}

impl Selection {
    /// All selections in column order.
    pub const ALL: [Selection; 3] = [Selection::Home, Selection::Draw, Selection::Away];

    /// The same real-world outcome seen from a fixture listed the other way round.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
            Self::Draw => Self::Draw,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Draw => "Draw",
            Self::Away => "Away",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
