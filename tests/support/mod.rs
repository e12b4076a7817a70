#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const BOOKIE_HEADER: &str = "Home Team,Away Team,Home Back Odds,Draw Back Odds,Away Back Odds";
pub const EXCHANGE_HEADER: &str =
    "Home Team,Away Team,Home Back Odds,Draw Back Odds,Away Back Odds,Home Lay Odds,Draw Lay Odds,Away Lay Odds";

/// A temp directory laid out like the default `CSV Files/` folder.
pub struct Fixtures {
    pub dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let mut text = String::from(header);
        text.push('\n');
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        let path = self.file(name);
        fs::write(&path, text).expect("write fixture");
        path
    }

    /// The reference scenario: one clean fixture, one listed the other way
    /// round on Smarkets, one mismatched market and one bookmaker-only
    /// fixture.
    pub fn standard() -> Self {
        let fx = Self::new();
        fx.write(
            "skybet_scraper.csv",
            BOOKIE_HEADER,
            &[
                "Arsenal,Chelsea,2.50,3.40,2.90",
                "Leeds United,Everton,1.80,3.60,4.50",
                "Spurs,Fulham,2.00,3.50,3.80",
                "Burnley,Luton,2.20,3.30,3.40",
            ],
        );
        fx.write(
            "smarkets_exchange_scraper.csv",
            EXCHANGE_HEADER,
            &[
                // Everton v Leeds: home/away reversed relative to the bookmaker
                "Everton,Leeds United,4.40,3.50,1.78,4.60,3.70,1.84",
                "Spurs,Fulham,1.98,3.45,3.75,2.02,3.55,9.00",
            ],
        );
        fx.write(
            "betfair_exchange_scraper.csv",
            EXCHANGE_HEADER,
            &["Arsenal,Chelsea,2.38,3.35,2.86,2.40,3.45,2.94"],
        );
        fx
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}
