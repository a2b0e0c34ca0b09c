//! Formatting utilities for section titles and element ids.

/// Turn a bucket name into a heading (`topRated` → "Top Rated",
/// `sci-fi` → "Sci Fi").
pub fn section_title(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build an element id from a prefix and an arbitrary bucket name.
///
/// Bytes outside `[A-Za-z0-9_-]` are written as `.` plus two hex digits, so
/// distinct names always get distinct ids.
pub fn grid_id(prefix: &str, name: &str) -> String {
    let mut id = format!("{}-", prefix);
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            id.push(char::from(byte));
        } else {
            id.push_str(&format!(".{:02x}", byte));
        }
    }
    id
}
