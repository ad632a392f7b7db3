// src/specs/event_date.rs
use crate::core::patterns::DATES;

/// First date-like substring, trying formats in priority order.
/// A later format never wins over an earlier one, even if it appears
/// earlier in the text. Empty when nothing matches.
pub fn extract_event_date(text: &str) -> String {
    DATES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_month_in_sentence() {
        let text = "Results of the meet held on February 23, 2024 at Bayamon";
        assert_eq!(extract_event_date(text), "February 23, 2024");
    }

    #[test]
    fn day_range() {
        assert_eq!(extract_event_date("Indoor Classic\nMarch 1-2, 2024\n"), "March 1-2, 2024");
    }

    #[test]
    fn month_format_beats_earlier_numeric_date() {
        let text = "Printed 02/25/2024\nMeet date: Feb 23 2024";
        assert_eq!(extract_event_date(text), "Feb 23 2024");
    }

    #[test]
    fn numeric_formats() {
        assert_eq!(extract_event_date("Date 2024-02-23 Heat 1"), "2024-02-23");
        assert_eq!(extract_event_date("02/23/2024 Finals"), "02/23/2024");
    }

    #[test]
    fn nothing_date_like() {
        assert_eq!(extract_event_date("PL NAME TEAM TIME\n1 John Smith UPR 21.45"), "");
        assert_eq!(extract_event_date(""), "");
    }
}
