// tests/classify.rs
//
// Scoring engine: weights, thresholds, evidence and the whole-name rules.
//
mod common;

use std::sync::Arc;

use common::{approx, classifier, lexicon};
use indoname::config::{ScoringConfig, WholeNameRules};
use indoname::{NameClassifier, Tag};

#[test]
fn empty_and_title_only_names_are_negative() {
    let c = classifier();
    for raw in ["", "   ", "\t\n", "Dr.", "Prof. Dr.", "!!! ???"] {
        let r = c.classify(raw);
        assert!(!r.is_indonesian, "{raw:?}");
        assert!(r.evidence.is_empty(), "{raw:?}");
        assert_eq!(r.confidence, 0.0);
    }
    let none: [&str; 0] = [];
    assert!(!c.classify_tokens(&none).is_indonesian);
}

#[test]
fn names_outside_the_lexicon_are_negative() {
    let c = classifier();
    for raw in ["John Smith", "Hiroshi Tanaka", "Zhang Wei", "Olga Petrova Ivanova"] {
        let r = c.classify(raw);
        assert!(!r.is_indonesian, "{raw:?}");
        assert!(r.evidence.is_empty(), "{raw:?}");
    }
}

#[test]
fn known_first_and_last_match_at_any_length() {
    let c = classifier();
    for raw in ["Budi Santoso", "Budi Alpha Santoso", "Budi Alpha Beta Santoso", "Ahmad X Y Z Widodo"] {
        let r = c.classify(raw);
        assert!(r.is_indonesian, "{raw:?}");
        assert!(r.weight >= 6, "{raw:?} weight {}", r.weight);
    }
}

#[test]
fn budi_santoso() {
    let r = classifier().classify("Budi Santoso");
    assert!(r.is_indonesian);
    assert_eq!(r.reasons(), vec!["first_name:Budi", "pattern:Budi", "last_name:Santoso"]);
    assert_eq!(r.weight, 3 + 2 + 3);
    assert!(approx(r.confidence, 1.0));
}

#[test]
fn john_smith() {
    let r = classifier().classify("John Smith");
    assert!(!r.is_indonesian);
    assert!(r.reasons().is_empty());
    assert_eq!(r.confidence, 0.0);
}

#[test]
fn i_made_pastika() {
    let r = classifier().classify("I Made Pastika");
    assert!(r.is_indonesian);
    // Made is a first name off position 0, and a pattern; "I " fires the whole-name rule
    assert_eq!(r.weight, 2 + 2 + 1);
    assert_eq!(r.reasons(), vec!["first_name:Made", "pattern:Made", "indonesian_pattern"]);
}

#[test]
fn dr_ahmad_dhani() {
    let r = classifier().classify("Dr. Ahmad Dhani");
    assert!(r.is_indonesian);
    assert_eq!(r.evidence[0].tag, Tag::FirstName);
    assert_eq!(r.evidence[0].token.as_deref(), Some("Ahmad"));
    assert_eq!(r.weight, 3 + 1);
}

#[test]
fn position_changes_weight() {
    let c = classifier();
    let forward = c.classify_tokens(&["Budi", "Santoso"]);
    let reversed = c.classify_tokens(&["Santoso", "Budi"]);
    assert_eq!(forward.weight, 3 + 2 + 3);
    assert_eq!(reversed.weight, 2 + 2 + 2);
    assert!(reversed.is_indonesian);
}

#[test]
fn one_token_earns_every_tag_it_matches() {
    let r = classifier().classify("Made");
    assert_eq!(r.reasons(), vec!["first_name:Made", "pattern:Made"]);
    assert_eq!(r.weight, 3 + 2);

    let r = classifier().classify("Siti Rahayuningrum");
    assert_eq!(
        r.reasons(),
        vec!["first_name:Siti", "affix:Siti", "affix:Rahayuningrum"]
    );
    assert_eq!(r.weight, 3 + 1 + 1);
}

#[test]
fn threshold_rises_after_two_tokens() {
    let c = classifier();

    let two = c.classify("Alpha Kartikasari");
    assert_eq!(two.weight, 1);
    assert!(two.is_indonesian);

    let three = c.classify("Alpha Beta Kartikasari");
    assert_eq!(three.weight, 1);
    assert!(!three.is_indonesian);
    // evidence survives a negative decision
    assert_eq!(three.reasons(), vec!["affix:Kartikasari"]);
}

#[test]
fn whole_name_markers() {
    let c = classifier();

    let r = c.classify("Hasan bin Yusuf");
    assert_eq!(r.reasons(), vec!["indonesian_pattern"]);
    assert!(!r.is_indonesian, "one point is below the three-token threshold");

    let r = c.classify("Van Houten");
    assert_eq!(r.reasons(), vec!["indonesian_pattern"]);
    assert!(r.is_indonesian);

    // substring, not word, match: "made pastika" contains "de "
    let r = c.classify("Made Pastika");
    assert!(r.reasons().contains(&"indonesian_pattern".to_string()));

    // recorded once even when several markers hit
    let r = c.classify("Abdul Ahmad bin Muhammad");
    let whole = r.evidence.iter().filter(|e| e.tag == Tag::IndonesianPattern).count();
    assert_eq!(whole, 1);
}

#[test]
fn lone_initial_is_not_a_name() {
    let c = classifier();
    let r = c.classify("I");
    assert!(!r.is_indonesian);
    assert!(r.evidence.is_empty());

    let r = c.classify("i Ketut");
    assert_eq!(r.reasons(), vec!["indonesian_pattern"]);
    assert!(r.is_indonesian);
}

#[test]
fn lookups_are_case_insensitive_and_keep_spelling() {
    let c = classifier();
    let upper = c.classify("BUDI santoso");
    let title = c.classify("Budi Santoso");
    assert_eq!(upper.is_indonesian, title.is_indonesian);
    assert_eq!(upper.weight, title.weight);
    assert_eq!(upper.reasons(), vec!["first_name:BUDI", "pattern:BUDI", "last_name:santoso"]);
}

#[test]
fn classification_is_repeatable() {
    let c = classifier();
    for raw in ["Budi Santoso", "I Made Pastika", "John Smith", "Alpha Beta Kartikasari"] {
        assert_eq!(c.classify(raw), c.classify(raw));
    }
    let tokens = vec!["Joko".to_string(), "Widodo".to_string()];
    assert_eq!(c.classify_tokens(&tokens), c.classify_tokens(&tokens));
}

#[test]
fn is_indonesian_name_returns_reason_strings() {
    let (yes, reasons) = classifier().is_indonesian_name("Joko Widodo");
    assert!(yes);
    assert_eq!(reasons, vec!["first_name:Joko", "last_name:Widodo"]);
}

#[test]
fn config_tunes_without_changing_the_algorithm() {
    let mut cfg = ScoringConfig::default();
    cfg.thresholds.short = 10;
    let strict = NameClassifier::with_config(lexicon(), cfg);
    assert!(!strict.classify("Budi Santoso").is_indonesian);

    let cfg = ScoringConfig {
        whole_name: WholeNameRules { markers: vec!["putra".into()], leading_initial: None },
        ..ScoringConfig::default()
    };
    let custom = NameClassifier::with_config(lexicon(), cfg);
    assert!(custom.classify("Rangga Putra").is_indonesian);
    assert!(!custom.classify("I Ketut").is_indonesian);
    assert!(!custom.classify("Hasan Bin Yusuf Alpha").reasons().contains(&"indonesian_pattern".to_string()));
}

#[test]
fn shared_across_threads_without_locks() {
    let c = Arc::new(classifier());
    let names = ["Budi Santoso", "John Smith", "I Made Pastika", "Dr. Ahmad Dhani"];
    let expected: Vec<bool> = names.iter().map(|n| c.classify(n).is_indonesian).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let c = Arc::clone(&c);
            let expected = &expected;
            scope.spawn(move || {
                for (name, want) in names.iter().zip(expected) {
                    assert_eq!(c.classify(name).is_indonesian, *want);
                }
            });
        }
    });
    assert_eq!(expected, vec![true, false, true, true]);
}
