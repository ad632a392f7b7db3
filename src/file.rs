// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::{COMBINED_COLUMNS, COMBINED_ROW_COL, COMBINED_TABLE_COL};
use crate::core::sanitize::sanitize_label_filename;
use crate::csv::{fit_row, write_row};
use crate::data::{Record, TableSet};
use crate::error::{Result, ScrapeError};

/// Create/truncate `path` and write `headers` (if any) then `rows`.
fn write_csv(path: &Path, headers: Option<&[String]>, rows: impl IntoIterator<Item = Vec<String>>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let io = |e| ScrapeError::output(path, e);

    let file = File::create(path).map_err(io)?;
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h).map_err(io)?;
    }
    for row in rows {
        write_row(&mut out, &row).map_err(io)?;
    }
    out.flush().map_err(io)?;
    Ok(())
}

/// Records in `PL,NAME,YEAR,TEAM,TIME,SOURCE_FILE,EVENT_DATE` order.
/// An empty slice still produces the header row.
pub fn write_records_csv(path: &Path, records: &[Record]) -> Result<PathBuf> {
    write_csv(path, Some(Record::headers().as_slice()), records.iter().map(Record::to_row))?;
    logf!("Wrote {} records to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

/// One `<prefix>_<label>.csv` per table: header row (when the table has one),
/// then the rows as-is.
pub fn write_table_csvs(dir: &Path, prefix: &str, tables: &TableSet) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(tables.len());

    for (i, table) in tables.iter().enumerate() {
        let stem = format!("{prefix}_{}", sanitize_label_filename(&table.label, i + 1));
        let path = resolve_unique_filename(dir, &stem, &mut seen, "csv");
        let headers = (!table.headers.is_empty()).then_some(table.headers.as_slice());
        write_csv(&path, headers, table.rows.iter().cloned())?;
        logd!("Saved {} to {}", table.label, path.display());
        written.push(path);
    }
    Ok(written)
}

/// All tables in one file: `Table_Name,Row_Number,Column_0..Column_19`.
/// Row numbers are 1-based per table; cells are padded/truncated to the
/// fixed column count.
pub fn write_combined_csv(path: &Path, tables: &TableSet) -> Result<PathBuf> {
    let mut headers = row![COMBINED_TABLE_COL, COMBINED_ROW_COL];
    headers.extend((0..COMBINED_COLUMNS).map(|i| format!("Column_{i}")));

    let rows = tables.iter().flat_map(|t| {
        t.rows.iter().enumerate().map(move |(i, r)| {
            let mut out = row![&t.label];
            out.push((i + 1).to_string());
            out.extend(fit_row(r, COMBINED_COLUMNS));
            out
        })
    });

    write_csv(path, Some(headers.as_slice()), rows)?;
    logf!("Saved combined results to {}", path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::output(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::output(dir, e))?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**: `<stem>.ext`, then
/// `<stem> (2).ext`, `<stem> (3).ext`, ...
pub fn resolve_unique_filename(
    dir: &Path,
    stem: &str,
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_stems_get_numbered() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        assert_eq!(resolve_unique_filename(dir, "r", &mut seen, "csv"), dir.join("r.csv"));
        assert_eq!(resolve_unique_filename(dir, "r", &mut seen, "csv"), dir.join("r (2).csv"));
        assert_eq!(resolve_unique_filename(dir, "r", &mut seen, "csv"), dir.join("r (3).csv"));
    }

    #[test]
    fn headerless_table_has_no_blank_first_line() {
        let tmp = tempfile::tempdir().unwrap();
        let mut set = TableSet::new();
        set.insert(crate::data::RawTable {
            label: s!("table_1"),
            headers: vec![],
            rows: vec![row!["1", "A"]],
        });

        let written = write_table_csvs(tmp.path(), "t", &set).unwrap();
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "1,A\n");
    }

    #[test]
    fn ensure_directory_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let f = tmp.path().join("plain");
        fs::write(&f, "x").unwrap();
        assert!(matches!(ensure_directory(&f), Err(ScrapeError::Output { .. })));

        let nested = tmp.path().join("a/b");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
