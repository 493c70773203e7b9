// src/core/sanitize.rs

/// Trim, and collapse every whitespace run to a single ' '.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.trim().chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out
}

/// Characters a name token may keep: letters, hyphen, apostrophe.
#[inline]
pub fn is_name_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '-' || ch == '\''
}

/// Drop everything except name characters and whitespace.
pub fn keep_name_chars(s: &str) -> String {
    s.chars().filter(|&c| is_name_char(c) || c.is_whitespace()).collect()
}

/// Comparison key for titles: lowercase letters only, so "Ph.D.", "PhD"
/// and "phd," share one key.
pub fn title_key(word: &str) -> String {
    word.chars().filter(|c| c.is_alphabetic()).flat_map(char::to_lowercase).collect()
}
