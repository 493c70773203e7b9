// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::lexicon::LexiconSet;

/// Everything the scoring engine and confidence mapper need besides the lexicon.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringConfig {
    pub weights: TokenWeights,
    pub thresholds: Thresholds,
    pub whole_name: WholeNameRules,
    pub confidence: ConfidenceWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: TokenWeights::default(),
            thresholds: Thresholds::default(),
            whole_name: WholeNameRules::default(),
            confidence: ConfidenceWeights::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenWeights {
    pub first_name_leading: u32,
    pub first_name: u32,
    pub last_name_trailing: u32,
    pub last_name: u32,
    pub pattern: u32,
    pub affix: u32,
    pub whole_name: u32,
}

impl Default for TokenWeights {
    fn default() -> Self {
        Self {
            first_name_leading: FIRST_NAME_LEADING_WEIGHT,
            first_name: FIRST_NAME_WEIGHT,
            last_name_trailing: LAST_NAME_TRAILING_WEIGHT,
            last_name: LAST_NAME_WEIGHT,
            pattern: PATTERN_WEIGHT,
            affix: AFFIX_WEIGHT,
            whole_name: WHOLE_NAME_WEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Names with more tokens than this use `long`.
    pub long_name_after: usize,
    pub short: u32,
    pub long: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            long_name_after: LONG_NAME_AFTER,
            short: SHORT_NAME_THRESHOLD,
            long: LONG_NAME_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn for_len(&self, n: usize) -> u32 {
        if n > self.long_name_after { self.long } else { self.short }
    }
}

/// Whole-string convention markers. Data, not domain truth: extend freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WholeNameRules {
    /// Lowercase substrings searched in the space-joined name.
    pub markers: Vec<String>,
    /// Lowercase single token that, in first position, fires the rule.
    pub leading_initial: Option<String>,
}

impl Default for WholeNameRules {
    fn default() -> Self {
        Self {
            markers: WHOLE_NAME_MARKERS.iter().map(|m| s!(*m)).collect(),
            leading_initial: Some(s!(HONORIFIC_INITIAL)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceWeights {
    pub first_name: f64,
    pub last_name: f64,
    pub pattern: f64,
    pub affix: f64,
    pub whole_name: f64,
    pub max: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            first_name: FIRST_NAME_CONFIDENCE,
            last_name: LAST_NAME_CONFIDENCE,
            pattern: PATTERN_CONFIDENCE,
            affix: AFFIX_CONFIDENCE,
            whole_name: WHOLE_NAME_CONFIDENCE,
            max: MAX_CONFIDENCE,
        }
    }
}

/// Where each lexicon set is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconPaths {
    pub first_names: PathBuf,
    pub last_names: PathBuf,
    pub patterns: PathBuf,
    pub prefixes: PathBuf,
    pub suffixes: PathBuf,
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl LexiconPaths {
    /// Standard file names under `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            first_names: dir.join(FIRST_NAMES_FILE),
            last_names: dir.join(LAST_NAMES_FILE),
            patterns: dir.join(PATTERNS_FILE),
            prefixes: dir.join(PREFIXES_FILE),
            suffixes: dir.join(SUFFIXES_FILE),
        }
    }

    pub fn get(&self, set: LexiconSet) -> &Path {
        match set {
            LexiconSet::FirstNames => &self.first_names,
            LexiconSet::LastNames => &self.last_names,
            LexiconSet::Patterns => &self.patterns,
            LexiconSet::Prefixes => &self.prefixes,
            LexiconSet::Suffixes => &self.suffixes,
        }
    }
}
