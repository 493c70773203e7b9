// tests/common/mod.rs
//
// Small in-memory lexicon shared by the integration tests.
//
#![allow(dead_code)]

use indoname::{Lexicon, NameClassifier};

pub const FIRST: &str = "\
# first names
Budi
Ahmad
Made
Siti
Dewi
Joko
Rizki

putu
";

pub const LAST: &str = "\
# last names
Santoso
Widodo
Pratama
Kusuma
Nasution
";

pub const PATTERNS: &str = "\
# cultural patterns
Budi
Made
Putu
Wayan
Nyoman
Sri
";

pub const PREFIXES: &str = "\
abdul
nurul
siti
";

pub const SUFFIXES: &str = "\
wati
yanto
ningrum
sari
";

pub fn lexicon() -> Lexicon {
    Lexicon::from_texts(FIRST, LAST, PATTERNS, PREFIXES, SUFFIXES)
}

pub fn classifier() -> NameClassifier {
    NameClassifier::new(lexicon())
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Fresh directory under the system temp dir; removed first if it exists.
pub fn tmp_dir(name: &str) -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("indoname_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
