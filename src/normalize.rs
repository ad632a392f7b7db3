// src/normalize.rs
use crate::core::patterns::is_loose_time;
use crate::core::sanitize::is_all_digits;
use crate::data::Record;
use crate::specs::text_table::ResultLine;

/// Per-document metadata attached to every record from that document.
#[derive(Clone, Debug, Default)]
pub struct DocumentMeta {
    pub source_file: String,
    pub event_date: String,
}

/// Turn a parsed line into a record, or `None` when it fails validation:
/// place must be all digits, name and team longer than one character,
/// and time must look numeric.
pub fn normalize(line: ResultLine, meta: &DocumentMeta) -> Option<Record> {
    let ok = is_all_digits(&line.place)
        && line.name.chars().count() > 1
        && line.team.chars().count() > 1
        && is_loose_time(&line.time);
    if !ok {
        return None;
    }

    Some(Record {
        place: line.place,
        name: line.name,
        year: line.year,
        team: line.team,
        time: line.time,
        source_file: meta.source_file.clone(),
        event_date: meta.event_date.clone(),
    })
}

pub fn normalize_all(lines: Vec<ResultLine>, meta: &DocumentMeta) -> Vec<Record> {
    lines.into_iter().filter_map(|l| normalize(l, meta)).collect()
}
