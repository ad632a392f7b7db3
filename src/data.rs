// src/data.rs
//
// Shapes that leave the parsers and reach the CSV writers.
//
// - Record:   one normalized result row (PL/NAME/YEAR/TEAM/TIME + metadata).
// - RawTable: an HTML table kept as-is, under its derived label.
// - TableSet: labelled tables in page order; a repeated label replaces the
//             earlier table in place.

use crate::config::consts::RECORD_HEADERS;

/// One normalized race result. Built once, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub place: String,
    pub name: String,
    pub year: String,
    pub team: String,
    pub time: String,
    pub source_file: String,
    pub event_date: String,
}

impl Record {
    pub fn headers() -> Vec<String> {
        RECORD_HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// Cells in `RECORD_HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        row![
            &self.place,
            &self.name,
            &self.year,
            &self.team,
            &self.time,
            &self.source_file,
            &self.event_date,
        ]
    }
}

/// An HTML table before any schema mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub label: String,
    /// First row's non-empty cells.
    pub headers: Vec<String>,
    /// Later rows; every row has at least one non-empty cell.
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Default)]
pub struct TableSet {
    tables: Vec<RawTable>,
}

impl TableSet {
    pub fn new() -> Self { Self::default() }

    /// Insert, replacing a table that already carries the same label.
    pub fn insert(&mut self, table: RawTable) {
        match self.tables.iter_mut().find(|t| t.label == table.label) {
            Some(slot) => {
                logw!("Duplicate table label '{}'; keeping the later table", table.label);
                *slot = table;
            }
            None => self.tables.push(table),
        }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.tables.is_empty() }
    #[inline] pub fn len(&self) -> usize { self.tables.len() }
    pub fn iter(&self) -> impl Iterator<Item = &RawTable> { self.tables.iter() }
    pub fn get(&self, label: &str) -> Option<&RawTable> {
        self.tables.iter().find(|t| t.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_row_follows_header_order() {
        let r = Record {
            place: s!("1"),
            name: s!("John Smith"),
            year: s!(),
            team: s!("University of State"),
            time: s!("21.45"),
            source_file: s!("meet.pdf"),
            event_date: s!("February 23, 2024"),
        };
        assert_eq!(Record::headers()[3], "TEAM");
        assert_eq!(
            r.to_row(),
            row!["1", "John Smith", "", "University of State", "21.45", "meet.pdf", "February 23, 2024"]
        );
    }

    #[test]
    fn repeated_label_replaces_in_place() {
        let mut set = TableSet::new();
        set.insert(RawTable { label: s!("results"), rows: vec![row!["a"]], ..Default::default() });
        set.insert(RawTable { label: s!("table_2"), rows: vec![row!["b"]], ..Default::default() });
        set.insert(RawTable { label: s!("results"), rows: vec![row!["c"]], ..Default::default() });

        let labels: Vec<&str> = set.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["results", "table_2"]);
        assert_eq!(set.get("results").unwrap().rows, vec![row!["c"]]);
    }
}
