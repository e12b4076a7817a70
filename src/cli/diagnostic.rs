//! Miette-based rendering of fatal errors.

use std::fmt::Display;

use miette::Diagnostic;
use thiserror::Error;

use crate::error::{ConfigError, Error, InputError};

/// A fatal error with an actionable hint.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FatalError {
    pub message: String,
    pub help: Option<String>,
    pub code: &'static str,
}

impl Diagnostic for FatalError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help.as_ref().map(|h| Box::new(h) as Box<dyn Display + 'a>)
    }
}

impl FatalError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            code,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&Error> for FatalError {
    fn from(err: &Error) -> Self {
        match err {
            Error::Input(InputError::Missing { available, .. }) => {
                let help = if available.is_empty() {
                    "no CSV files found next to it; check --data-dir or [inputs].dir".to_string()
                } else {
                    let names: Vec<String> = available
                        .iter()
                        .filter_map(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .collect();
                    format!("point [inputs] at one of: {}", names.join(", "))
                };
                FatalError::new("freebet::input::missing", err.to_string()).with_help(help)
            }
            Error::Input(InputError::UnknownExchange { name }) => {
                FatalError::new("freebet::input::commission", err.to_string()).with_help(format!(
                    "add `{name} = <percent>` under [commission.rates] or set [commission].unknown = \"zero\""
                ))
            }
            Error::Input(InputError::Csv { .. }) => FatalError::new("freebet::input::csv", err.to_string())
                .with_help("expected headers: Home Team, Away Team, Home/Draw/Away Back Odds, Home/Draw/Away Lay Odds"),
            Error::Config(ConfigError::ReadFile(_)) => {
                FatalError::new("freebet::config", err.to_string())
                    .with_help("create one with `freebet config init`")
            }
            Error::Config(_) => FatalError::new("freebet::config", err.to_string())
                .with_help("run `freebet config validate -c <path>` for details"),
            Error::Domain(_) => FatalError::new("freebet::calc", err.to_string())
                .with_help("odds must be > 1.0, stake > 0 and commission in [0, 100)"),
            _ => FatalError::new("freebet::error", err.to_string()),
        }
    }
}

/// Print a fatal error through miette's graphical handler.
pub fn report(err: &Error) {
    let report = miette::Report::new(FatalError::from(err));
    eprintln!("{report:?}");
}
