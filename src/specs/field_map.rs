// src/specs/field_map.rs
//! Header-keyword mapping from an arbitrary table onto the record schema.
//!
//! Each header is uppercased and tested against the keyword groups in a
//! fixed order (place, name, team, time, year, date); the first group with a
//! matching substring claims the column. When two columns claim the same
//! field the later one wins.

use crate::config::options::FieldKeywords;
use crate::data::{RawTable, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Place,
    Name,
    Team,
    Time,
    Year,
    EventDate,
}

/// Column index per field, `None` when no header matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldColumns {
    pub place: Option<usize>,
    pub name: Option<usize>,
    pub team: Option<usize>,
    pub time: Option<usize>,
    pub year: Option<usize>,
    pub event_date: Option<usize>,
}

impl FieldColumns {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn set(&mut self, field: Field, col: usize) {
        let slot = match field {
            Field::Place => &mut self.place,
            Field::Name => &mut self.name,
            Field::Team => &mut self.team,
            Field::Time => &mut self.time,
            Field::Year => &mut self.year,
            Field::EventDate => &mut self.event_date,
        };
        *slot = Some(col);
    }
}

pub fn classify_header(header: &str, kw: &FieldKeywords) -> Option<Field> {
    let upper = header.to_uppercase();
    let hit = |words: &[String]| words.iter().any(|w| upper.contains(w.as_str()));

    [
        (Field::Place, &kw.place),
        (Field::Name, &kw.name),
        (Field::Team, &kw.team),
        (Field::Time, &kw.time),
        (Field::Year, &kw.year),
        (Field::EventDate, &kw.date),
    ]
    .into_iter()
    .find(|(_, words)| hit(words))
    .map(|(f, _)| f)
}

pub fn identify_columns(headers: &[String], kw: &FieldKeywords) -> FieldColumns {
    let mut cols = FieldColumns::default();
    for (i, h) in headers.iter().enumerate() {
        if let Some(f) = classify_header(h, kw) {
            cols.set(f, i);
        }
    }
    cols
}

/// Map every usable row of `table`. Rows shorter than the header are skipped,
/// and so are rows where place, name, team, and time are all empty.
/// `fallback_date` fills EVENT_DATE when the table has no date column value.
pub fn map_records(
    table: &RawTable,
    source: &str,
    fallback_date: &str,
    kw: &FieldKeywords,
) -> Vec<Record> {
    let cols = identify_columns(&table.headers, kw);
    if cols.is_empty() {
        logw!("Could not identify target fields in table {}", table.label);
        return Vec::new();
    }
    logd!("Table {}: columns {:?}", table.label, cols);

    table
        .rows
        .iter()
        .filter(|row| row.len() >= table.headers.len())
        .filter_map(|row| {
            let cell = |c: Option<usize>| c.and_then(|i| row.get(i)).map(|v| v.trim().to_string()).unwrap_or_default();

            let rec = Record {
                place: cell(cols.place),
                name: cell(cols.name),
                year: cell(cols.year),
                team: cell(cols.team),
                time: cell(cols.time),
                source_file: s!(source),
                event_date: match cell(cols.event_date) {
                    d if d.is_empty() => s!(fallback_date),
                    d => d,
                },
            };

            let any = [&rec.place, &rec.name, &rec.team, &rec.time].iter().any(|v| !v.is_empty());
            any.then_some(rec)
        })
        .collect()
}
