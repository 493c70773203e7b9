// src/lib.rs
//! Heuristic classifier for Indonesian full names.
//!
//! ```text
//! raw name → normalizer::normalize → tokens
//!          → NameClassifier (Lexicon + ScoringConfig) → decision + evidence
//!          → confidence::score → [0, 1]
//! ```
//!
//! The lexicon is loaded once and never mutated, so one `NameClassifier`
//! can be shared across threads as-is.

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;

pub mod confidence;
pub mod lexicon;
pub mod logger;
pub mod normalizer;
pub mod params;
pub mod scan;
pub mod scoring;

#[cfg(feature = "cli")]
pub mod cli;

pub use lexicon::{Lexicon, LexiconError, LexiconSet, LexiconStats};
pub use scan::Detection;
pub use scoring::{Classification, Evidence, NameClassifier, Tag};
