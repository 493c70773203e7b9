// src/confidence.rs
//! Evidence → confidence in `[0, max]`.
//!
//! Saturating sum, not an average: every evidence item adds its tag's
//! increment and the total is clamped. Used for ranking, never for the
//! yes/no decision.

use crate::config::ConfidenceWeights;
use crate::scoring::{Evidence, Tag};

/// Score with the default increments.
pub fn score(evidence: &[Evidence]) -> f64 {
    score_with(evidence, &ConfidenceWeights::default())
}

pub fn score_with(evidence: &[Evidence], weights: &ConfidenceWeights) -> f64 {
    let sum: f64 = evidence.iter().map(|e| increment(e.tag, weights)).sum();
    sum.min(weights.max)
}

pub fn increment(tag: Tag, weights: &ConfidenceWeights) -> f64 {
    match tag {
        Tag::FirstName => weights.first_name,
        Tag::LastName => weights.last_name,
        Tag::Pattern => weights.pattern,
        Tag::Affix => weights.affix,
        Tag::IndonesianPattern => weights.whole_name,
    }
}
