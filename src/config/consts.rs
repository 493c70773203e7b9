// src/config/consts.rs

// Lexicon sources
pub const DEFAULT_DATA_DIR: &str = "data";
pub const FIRST_NAMES_FILE: &str = "first_names.txt";
pub const LAST_NAMES_FILE: &str = "last_names.txt";
pub const PATTERNS_FILE: &str = "common_patterns.txt";
pub const PREFIXES_FILE: &str = "prefixes.txt";
pub const SUFFIXES_FILE: &str = "suffixes.txt";
pub const COMMENT_MARKER: char = '#';

// Per-token weights
pub const FIRST_NAME_LEADING_WEIGHT: u32 = 3; // token 0
pub const FIRST_NAME_WEIGHT: u32 = 2;
pub const LAST_NAME_TRAILING_WEIGHT: u32 = 3; // token n-1
pub const LAST_NAME_WEIGHT: u32 = 2;
pub const PATTERN_WEIGHT: u32 = 2;
pub const AFFIX_WEIGHT: u32 = 1;
pub const WHOLE_NAME_WEIGHT: u32 = 1;

// Decision threshold, raised for names longer than LONG_NAME_AFTER tokens
pub const LONG_NAME_AFTER: usize = 2;
pub const SHORT_NAME_THRESHOLD: u32 = 1;
pub const LONG_NAME_THRESHOLD: u32 = 2;

// Confidence increments per evidence tag
pub const FIRST_NAME_CONFIDENCE: f64 = 0.4;
pub const LAST_NAME_CONFIDENCE: f64 = 0.4;
pub const PATTERN_CONFIDENCE: f64 = 0.3;
pub const AFFIX_CONFIDENCE: f64 = 0.2;
pub const WHOLE_NAME_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Leading/trailing words dropped by the normalizer (compared lowercase).
pub const TITLES: &[&str] = &[
    "dr.", "dr", "prof.", "prof", "ir.", "ir", "st.", "mt.", "s.kom", "s.t",
    "m.kom", "m.t", "ph.d", "phd", "mba", "cpa", "ca", "jr.", "sr.", "ii", "iii",
];

/// Substrings of the lowercased, space-joined name that signal a regional
/// naming convention. Patronymics, common Arabic-derived first names, and
/// colonial-era particles. Trailing spaces are significant.
pub const WHOLE_NAME_MARKERS: &[&str] = &[
    "bin ", "binti ",
    "van ", "de ",
    "abdul", "muhammad", "ahmad",
];

/// Balinese birth-order names are often written after a single "I".
pub const HONORIFIC_INITIAL: &str = "i";

// Candidate scanning: 2-4 capitalised words
pub const CANDIDATE_PATTERN: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3}\b";
