//! Ranked and suspect CSV artifacts.

use std::fs;
use std::io;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{EvaluatedPair, SuspectPair};
use crate::error::Result;

/// Column order of the ranked table.
pub const RANKED_HEADER: [&str; 10] = [
    "match",
    "selection",
    "exchange",
    "BO",
    "LO",
    "E",
    "lay_stake",
    "liability",
    "guaranteed_profit",
    "extraction_%",
];

/// Column order of the suspect table.
pub const SUSPECT_HEADER: [&str; 6] = ["match", "selection", "BO", "LO", "exchange", "E"];

const DECIMALS: u32 = 4;

/// Fixed-precision rendering used in every artifact.
pub fn fmt_decimal(value: Decimal) -> String {
    value.round_dp(DECIMALS).normalize().to_string()
}

pub fn write_ranked<W: io::Write>(writer: W, rows: &[EvaluatedPair]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(RANKED_HEADER)?;
    for r in rows {
        w.write_record([
            r.pair.match_label.clone(),
            r.pair.selection.to_string(),
            r.pair.exchange_name.clone(),
            fmt_decimal(r.pair.back_price),
            fmt_decimal(r.pair.lay_price),
            fmt_decimal(r.pair.commission_pct),
            fmt_decimal(r.lay_stake),
            fmt_decimal(r.liability),
            fmt_decimal(r.guaranteed_profit),
            fmt_decimal(r.extraction_pct),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_suspects<W: io::Write>(writer: W, rows: &[SuspectPair]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(SUSPECT_HEADER)?;
    for s in rows {
        w.write_record([
            s.pair.match_label.clone(),
            s.pair.selection.to_string(),
            fmt_decimal(s.pair.back_price),
            fmt_decimal(s.pair.lay_price),
            s.pair.exchange_name.clone(),
            fmt_decimal(s.pair.commission_pct),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write the ranked table, creating parent directories. Always written, even
/// when empty.
pub fn save_ranked(path: &Path, rows: &[EvaluatedPair]) -> Result<()> {
    ensure_parent(path)?;
    write_ranked(fs::File::create(path)?, rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote ranked table");
    Ok(())
}

/// Write the suspect table. With no suspects nothing is written and `false`
/// is returned, so "no suspects" never looks like an empty file.
pub fn save_suspects(path: &Path, rows: &[SuspectPair]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    ensure_parent(path)?;
    write_suspects(fs::File::create(path)?, rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote suspect table");
    Ok(true)
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
