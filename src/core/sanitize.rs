// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Table label from a caption or heading: lowercase, spaces → '_'.
pub fn label_from_text(text: &str) -> String {
    text.to_lowercase().replace(' ', "_")
}

/// File-system safe stem for a table label. Falls back to `table_<n>`.
pub fn sanitize_label_filename(label: &str, position: usize) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_us = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '.' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { format!("table_{}", position) } else { out }
}

/// True when every char is an ASCII digit (and there is at least one).
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
