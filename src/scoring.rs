// src/scoring.rs
//! Single-pass, stateless scoring of a token sequence against the lexicon.
//!
//! Per token (independent, additive checks):
//! - first-name set: heavier at position 0
//! - last-name set: heavier at the last position
//! - cultural-pattern set
//! - prefix/suffix containment
//!
//! Then one whole-string convention check, and a threshold that rises for
//! names longer than two tokens. Evidence is collected even when the final
//! decision is negative.

use std::fmt;

use crate::config::ScoringConfig;
use crate::confidence;
use crate::lexicon::{Lexicon, LexiconSet};
use crate::normalizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    FirstName,
    LastName,
    Pattern,
    Affix,
    IndonesianPattern,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::FirstName => "first_name",
            Tag::LastName => "last_name",
            Tag::Pattern => "pattern",
            Tag::Affix => "affix",
            Tag::IndonesianPattern => "indonesian_pattern",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation. `token` is `None` for whole-string rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evidence {
    pub tag: Tag,
    pub token: Option<String>,
}

impl Evidence {
    fn token(tag: Tag, token: &str) -> Self {
        Self { tag, token: Some(s!(token)) }
    }

    fn whole(tag: Tag) -> Self {
        Self { tag, token: None }
    }
}

/// `"<tag>:<token>"`, or the bare tag for whole-string evidence.
impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(t) => write!(f, "{}:{}", self.tag, t),
            None => write!(f, "{}", self.tag),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub is_indonesian: bool,
    pub evidence: Vec<Evidence>,
    pub confidence: f64,
    pub weight: u32,
}

impl Classification {
    fn negative() -> Self {
        Self { is_indonesian: false, evidence: Vec::new(), confidence: 0.0, weight: 0 }
    }

    /// Evidence in its string form, for logs and output.
    pub fn reasons(&self) -> Vec<String> {
        self.evidence.iter().map(ToString::to_string).collect()
    }
}

/// Lexicon + tuning, frozen after construction. Share it by reference or `Arc`.
#[derive(Clone, Debug)]
pub struct NameClassifier {
    lexicon: Lexicon,
    config: ScoringConfig,
}

impl NameClassifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, ScoringConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: ScoringConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn lexicon(&self) -> &Lexicon { &self.lexicon }

    pub fn config(&self) -> &ScoringConfig { &self.config }

    /// Normalize, score and attach a confidence.
    pub fn classify(&self, raw: &str) -> Classification {
        let tokens = normalizer::normalize(raw);
        let c = self.classify_tokens(&tokens);
        log::debug!(
            "classify {:?} -> {} (weight {}, confidence {:.2})",
            raw, c.is_indonesian, c.weight, c.confidence
        );
        c
    }

    /// Decision and evidence only.
    pub fn is_indonesian_name(&self, raw: &str) -> (bool, Vec<String>) {
        let c = self.classify(raw);
        let reasons = c.reasons();
        (c.is_indonesian, reasons)
    }

    /// Score an already-normalized token sequence.
    pub fn classify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Classification {
        if tokens.is_empty() {
            return Classification::negative();
        }

        let (weight, evidence) = self.score(tokens);
        let threshold = self.config.thresholds.for_len(tokens.len());
        let confidence = confidence::score_with(&evidence, &self.config.confidence);

        Classification {
            is_indonesian: weight >= threshold,
            evidence,
            confidence,
            weight,
        }
    }

    fn score<S: AsRef<str>>(&self, tokens: &[S]) -> (u32, Vec<Evidence>) {
        let w = &self.config.weights;
        let lex = &self.lexicon;
        let last = tokens.len() - 1;

        let mut weight = 0;
        let mut evidence = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let folded = token.to_lowercase();

            if lex.contains(LexiconSet::FirstNames, &folded) {
                weight += if i == 0 { w.first_name_leading } else { w.first_name };
                evidence.push(Evidence::token(Tag::FirstName, token));
            }
            if lex.contains(LexiconSet::LastNames, &folded) {
                weight += if i == last { w.last_name_trailing } else { w.last_name };
                evidence.push(Evidence::token(Tag::LastName, token));
            }
            if lex.contains(LexiconSet::Patterns, &folded) {
                weight += w.pattern;
                evidence.push(Evidence::token(Tag::Pattern, token));
            }
            if lex.prefix_or_suffix_match(&folded) {
                weight += w.affix;
                evidence.push(Evidence::token(Tag::Affix, token));
            }
        }

        if self.has_whole_name_marker(tokens) {
            weight += w.whole_name;
            evidence.push(Evidence::whole(Tag::IndonesianPattern));
        }

        (weight, evidence)
    }

    fn has_whole_name_marker<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let rules = &self.config.whole_name;

        // "I Made ...": the initial only counts with a name after it
        let leading = tokens.len() > 1
            && rules.leading_initial.as_deref().is_some_and(|initial| {
                tokens[0].as_ref().to_lowercase() == initial
            });
        if leading {
            return true;
        }

        let joined = tokens
            .iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        rules.markers.iter().any(|m| joined.contains(m.as_str()))
    }
}
