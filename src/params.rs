// src/params.rs
use std::path::PathBuf;

use crate::config::consts::DEFAULT_DATA_DIR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub data_dir: PathBuf,          // lexicon directory
    pub log_file: Option<PathBuf>,  // append log lines here instead of stderr
    pub verbose: bool,              // debug-level logging
    pub show_all: bool,             // print negatives too
    pub text_file: Option<PathBuf>, // scan free text for candidates
    pub names: Vec<String>,         // positional names; empty → stdin
}

impl Params {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file: None,
            verbose: false,
            show_all: false,
            text_file: None,
            names: Vec::new(),
        }
    }

    /// Neither names nor a text file given: read names from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.names.is_empty() && self.text_file.is_none()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
