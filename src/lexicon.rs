// src/lexicon.rs
//! Lexicon store: five independent, read-only sets of name fragments.
//!
//! Built once from line-delimited sources (blank lines and `#` comments are
//! skipped, everything else is an entry, lowercased and trimmed), then only
//! read. A failed source aborts the whole load; no partial store escapes.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::consts::COMMENT_MARKER;
use crate::config::LexiconPaths;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexiconSet {
    FirstNames,
    LastNames,
    Patterns,
    Prefixes,
    Suffixes,
}

impl LexiconSet {
    pub const ALL: [LexiconSet; 5] = [
        LexiconSet::FirstNames,
        LexiconSet::LastNames,
        LexiconSet::Patterns,
        LexiconSet::Prefixes,
        LexiconSet::Suffixes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LexiconSet::FirstNames => "first_names",
            LexiconSet::LastNames => "last_names",
            LexiconSet::Patterns => "common_patterns",
            LexiconSet::Prefixes => "prefixes",
            LexiconSet::Suffixes => "suffixes",
        }
    }
}

impl fmt::Display for LexiconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot open {set} source {}: {source}", .path.display())]
    Open {
        set: LexiconSet,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {set} source {}: {source}", .path.display())]
    Read {
        set: LexiconSet,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LexiconError {
    pub fn set(&self) -> LexiconSet {
        match self {
            LexiconError::Open { set, .. } | LexiconError::Read { set, .. } => *set,
        }
    }
}

/// Entry counts, for the startup log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexiconStats {
    pub first_names: usize,
    pub last_names: usize,
    pub patterns: usize,
    pub prefixes: usize,
    pub suffixes: usize,
}

impl LexiconStats {
    pub fn total(&self) -> usize {
        self.first_names + self.last_names + self.patterns + self.prefixes + self.suffixes
    }

    pub fn get(&self, set: LexiconSet) -> usize {
        match set {
            LexiconSet::FirstNames => self.first_names,
            LexiconSet::LastNames => self.last_names,
            LexiconSet::Patterns => self.patterns,
            LexiconSet::Prefixes => self.prefixes,
            LexiconSet::Suffixes => self.suffixes,
        }
    }
}

impl fmt::Display for LexiconStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in LexiconSet::ALL {
            write!(f, "{}={} ", set, self.get(set))?;
        }
        write!(f, "total={}", self.total())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    first_names: HashSet<String>,
    last_names: HashSet<String>,
    patterns: HashSet<String>,
    prefixes: HashSet<String>,
    suffixes: HashSet<String>,
}

impl Lexicon {
    /// Load all five sets from the standard file names under `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, LexiconError> {
        Self::load(&LexiconPaths::in_dir(dir))
    }

    /// Load all five sets. The first unreadable source aborts the load.
    pub fn load(paths: &LexiconPaths) -> Result<Self, LexiconError> {
        let mut lex = Lexicon::default();
        for set in LexiconSet::ALL {
            let path = paths.get(set);
            let file = File::open(path).map_err(|source| LexiconError::Open {
                set,
                path: path.to_path_buf(),
                source,
            })?;
            let entries = read_entries(BufReader::new(file)).map_err(|source| LexiconError::Read {
                set,
                path: path.to_path_buf(),
                source,
            })?;
            *lex.set_mut(set) = entries;
        }
        log::info!("Loaded name lexicon: {}", lex.stats());
        Ok(lex)
    }

    /// Build from in-memory text, one source per set. Cannot fail.
    pub fn from_texts(first: &str, last: &str, patterns: &str, prefixes: &str, suffixes: &str) -> Self {
        Self {
            first_names: parse_entries(first),
            last_names: parse_entries(last),
            patterns: parse_entries(patterns),
            prefixes: parse_entries(prefixes),
            suffixes: parse_entries(suffixes),
        }
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, set: LexiconSet, token: &str) -> bool {
        let set = self.set(set);
        if set.contains(token) {
            return true;
        }
        let folded = token.to_lowercase();
        folded != token && set.contains(&folded)
    }

    /// True when `token` starts with any prefix or ends with any suffix.
    /// Linear in the affix sets, which stay small.
    pub fn prefix_or_suffix_match(&self, token: &str) -> bool {
        let folded = token.to_lowercase();
        self.prefixes.iter().any(|p| folded.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| folded.ends_with(s.as_str()))
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            first_names: self.first_names.len(),
            last_names: self.last_names.len(),
            patterns: self.patterns.len(),
            prefixes: self.prefixes.len(),
            suffixes: self.suffixes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats().total() == 0
    }

    fn set(&self, set: LexiconSet) -> &HashSet<String> {
        match set {
            LexiconSet::FirstNames => &self.first_names,
            LexiconSet::LastNames => &self.last_names,
            LexiconSet::Patterns => &self.patterns,
            LexiconSet::Prefixes => &self.prefixes,
            LexiconSet::Suffixes => &self.suffixes,
        }
    }

    fn set_mut(&mut self, set: LexiconSet) -> &mut HashSet<String> {
        match set {
            LexiconSet::FirstNames => &mut self.first_names,
            LexiconSet::LastNames => &mut self.last_names,
            LexiconSet::Patterns => &mut self.patterns,
            LexiconSet::Prefixes => &mut self.prefixes,
            LexiconSet::Suffixes => &mut self.suffixes,
        }
    }
}

/// `Some(entry)` for a usable line, `None` for blank lines and comments.
fn entry(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }
    Some(line.to_lowercase())
}

fn parse_entries(text: &str) -> HashSet<String> {
    text.lines().filter_map(entry).collect()
}

fn read_entries<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let mut out = HashSet::new();
    for line in reader.lines() {
        if let Some(e) = entry(&line?) {
            out.insert(e);
        }
    }
    Ok(out)
}
