// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Output is always comma-separated UTF-8.
pub const SEP: char = ',';

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Pad with empty cells or truncate so the row has exactly `width` cells.
pub fn fit_row(row: &[String], width: usize) -> Vec<String> {
    let mut out: Vec<String> = row.iter().take(width).cloned().collect();
    out.resize(width, s!());
    out
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV reader (quotes + CRLF tolerant), enough to read our own output back.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row!["1", "Smith, John", "say \"hi\"", "a\nb"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,\"Smith, John\",\"say \"\"hi\"\"\",\"a\nb\"\n");
    }

    #[test]
    fn written_rows_read_back() {
        let rows = vec![row!["PL", "NAME", "TEAM"], row!["1", "Smith, John", ""], row!["2", "P.R. \"Tech\"", "x"]];
        let mut buf = Vec::new();
        for r in &rows {
            write_row(&mut buf, r).unwrap();
        }
        let back = parse_rows(&String::from_utf8(buf).unwrap());
        assert_eq!(back, rows);
    }

    #[test]
    fn fit_row_pads_and_truncates() {
        assert_eq!(fit_row(&row!["a", "b"], 4), row!["a", "b", "", ""]);
        assert_eq!(fit_row(&row!["a", "b", "c"], 2), row!["a", "b"]);
    }
}
