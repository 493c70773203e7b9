// src/normalizer.rs
//! Raw candidate name → ordered token sequence.
//!
//! Steps, in order:
//! 1. trim + collapse whitespace runs,
//! 2. drop title/honorific words at either end (repeatedly, so "Prof. Dr." both go),
//! 3. keep only letters, whitespace, `-` and `'`,
//! 4. split on whitespace.
//!
//! Original spelling and case are preserved; lookups case-fold later.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::consts::TITLES;
use crate::core::sanitize::{keep_name_chars, normalize_ws, title_key};

static TITLE_KEYS: LazyLock<HashSet<String>> =
    LazyLock::new(|| TITLES.iter().map(|t| title_key(t)).collect());

/// Tokens of a normalized name. Empty when nothing name-like is left.
pub fn normalize(raw: &str) -> Vec<String> {
    let collapsed = normalize_ws(raw);
    if collapsed.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = collapsed.split(' ').collect();
    let kept = strip_titles(&words);
    if kept.is_empty() {
        return Vec::new();
    }

    keep_name_chars(&kept.join(" "))
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Space-joined form of `normalize`, handy for display and dedup keys.
pub fn clean_name(raw: &str) -> String {
    normalize(raw).join(" ")
}

pub fn is_title(word: &str) -> bool {
    let key = title_key(word);
    !key.is_empty() && TITLE_KEYS.contains(&key)
}

fn strip_titles<'a>(words: &'a [&'a str]) -> &'a [&'a str] {
    let mut lo = 0;
    let mut hi = words.len();
    while lo < hi && is_title(words[lo]) {
        lo += 1;
    }
    while hi > lo && is_title(words[hi - 1]) {
        hi -= 1;
    }
    &words[lo..hi]
}
