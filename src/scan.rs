// src/scan.rs
//! Candidate names in free text, and ranking of what was found.
//!
//! The text is whatever the caller already extracted from a page; this module
//! never sees HTML. A candidate is 2-4 capitalised words in a row.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::CANDIDATE_PATTERN;
use crate::scoring::NameClassifier;

static CANDIDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CANDIDATE_PATTERN).expect("candidate pattern compiles"));

/// A positive classification with the name as it appeared.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub name: String,
    pub reasons: Vec<String>,
    pub confidence: f64,
}

/// All candidate substrings, in order of appearance (duplicates included).
pub fn candidates(text: &str) -> impl Iterator<Item = &str> {
    CANDIDATE_RE.find_iter(text).map(|m| m.as_str())
}

/// Classify every candidate in `text` not already in `seen`.
/// Positives are returned and recorded in `seen`; negatives are not recorded.
pub fn scan_text(classifier: &NameClassifier, text: &str, seen: &mut HashSet<String>) -> Vec<Detection> {
    let mut out = Vec::new();
    for cand in candidates(text) {
        if seen.contains(cand) {
            continue;
        }
        let c = classifier.classify(cand);
        if !c.is_indonesian {
            continue;
        }
        log::debug!("candidate {cand:?} matched: {}", c.reasons().join(", "));
        out.push(Detection {
            name: s!(cand),
            reasons: c.reasons(),
            confidence: c.confidence,
        });
        seen.insert(s!(cand));
    }
    out
}

/// Classify a list of already-extracted names, keeping positives.
/// Names repeated verbatim are classified once.
pub fn detect_names<'a, I>(classifier: &NameClassifier, names: I, seen: &mut HashSet<String>) -> Vec<Detection>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for raw in names {
        let name = raw.trim();
        if name.is_empty() || seen.contains(name) {
            continue;
        }
        let c = classifier.classify(name);
        if c.is_indonesian {
            out.push(Detection { name: s!(name), reasons: c.reasons(), confidence: c.confidence });
            seen.insert(s!(name));
        }
    }
    out
}

/// One detection per lowercase name (highest confidence wins, first seen on
/// ties), ordered by confidence, highest first. Stable for equal scores.
pub fn dedup_by_confidence(detections: Vec<Detection>) -> Vec<Detection> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<Detection> = Vec::with_capacity(detections.len());

    for d in detections {
        let key = d.name.to_lowercase();
        match index.get(&key) {
            Some(&i) => {
                if d.confidence > kept[i].confidence {
                    kept[i] = d;
                }
            }
            None => {
                index.insert(key, kept.len());
                kept.push(d);
            }
        }
    }

    kept.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    kept
}
