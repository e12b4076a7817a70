use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while loading the odds tables.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{}", render_missing(path, cwd, expected_dir, available))]
    Missing {
        path: PathBuf,
        cwd: PathBuf,
        expected_dir: PathBuf,
        available: Vec<PathBuf>,
    },

    #[error("no commission rate configured for exchange '{name}'")]
    UnknownExchange { name: String },

    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn render_missing(
    path: &std::path::Path,
    cwd: &std::path::Path,
    expected_dir: &std::path::Path,
    available: &[PathBuf],
) -> String {
    let mut msg = format!(
        "could not find: {}\nworking dir: {}\nexpected in: {}\navailable CSVs:",
        path.display(),
        cwd.display(),
        expected_dir.display()
    );
    if available.is_empty() {
        msg.push_str(" (none)");
    }
    for p in available {
        let _ = write!(msg, "\n  - {}", p.display());
    }
    msg
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_lists_alternatives() {
        let err = InputError::Missing {
            path: PathBuf::from("data/bookie.csv"),
            cwd: PathBuf::from("/work"),
            expected_dir: PathBuf::from("data"),
            available: vec![PathBuf::from("data/bookie_old.csv"), PathBuf::from("data/x.CSV")],
        };
        let text = err.to_string();

        assert!(text.starts_with("could not find: data/bookie.csv"));
        assert!(text.contains("working dir: /work"));
        assert!(text.contains("expected in: data"));
        assert!(text.contains("  - data/bookie_old.csv"));
        assert!(text.contains("  - data/x.CSV"));
    }

    #[test]
    fn missing_input_without_alternatives_says_none() {
        let err = InputError::Missing {
            path: PathBuf::from("a.csv"),
            cwd: PathBuf::from("."),
            expected_dir: PathBuf::from("."),
            available: vec![],
        };
        assert!(err.to_string().ends_with("available CSVs: (none)"));
    }
}
