//! Loading odds tables from CSV files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::FixtureRow;
use crate::error::{InputError, Result};

/// Fail with a listing of nearby CSV files if `path` does not exist.
pub fn must_exist(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let expected_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    Err(InputError::Missing {
        path: path.to_path_buf(),
        cwd,
        available: list_csv_files(&expected_dir).unwrap_or_default(),
        expected_dir,
    }
    .into())
}

/// CSV files directly inside `dir`, sorted. Extension match ignores case.
pub fn list_csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Parse fixture rows from any reader. Headers and cells are trimmed;
/// unknown columns are ignored and missing odds columns read as blank.
pub fn read_rows<R: io::Read>(reader: R) -> std::result::Result<Vec<FixtureRow>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    rdr.deserialize().collect()
}

/// Load a fixture table from disk.
pub fn load_table(path: &Path) -> Result<Vec<FixtureRow>> {
    must_exist(path)?;
    let file = fs::File::open(path)?;
    let rows = read_rows(strip_bom(file)?).map_err(|source| InputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(rows)
}

/// Spreadsheet exports often start with a UTF-8 byte-order mark.
fn strip_bom<R: io::Read>(mut reader: R) -> io::Result<io::Cursor<Vec<u8>>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    if buf.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buf.drain(..3);
    }
    Ok(io::Cursor::new(buf))
}
