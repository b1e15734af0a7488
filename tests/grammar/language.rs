//! The set of sentences a normalized grammar generates.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use taskgen_foundation::ErrorKind;
use taskgen_grammar::{Generator, Grammar, MemoryLoader};

fn language(grammar: &Grammar, runs: u64) -> BTreeSet<String> {
    let generator = Generator::new(grammar);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    (0..runs).map(|_| generator.generate(&mut rng).unwrap()).collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn single_group() {
    let grammar = Grammar::parse("t.txt", "$Main = go (to|toward) the kitchen").unwrap();
    assert_eq!(
        language(&grammar, 100),
        set(&["go to the kitchen", "go toward the kitchen"])
    );
}

#[test]
fn nested_groups_and_references() {
    let text = "\
$Main = $Verb the (red (cup|mug)|plate)
$Verb = take | grab";
    let grammar = Grammar::parse("t.txt", text).unwrap();
    assert_eq!(
        language(&grammar, 400),
        set(&[
            "grab the plate",
            "grab the red cup",
            "grab the red mug",
            "take the plate",
            "take the red cup",
            "take the red mug",
        ])
    );
}

#[test]
fn empty_branch_makes_words_optional() {
    let grammar = Grammar::parse("t.txt", "$Main = (please|) sit").unwrap();
    let trimmed: BTreeSet<String> = language(&grammar, 100)
        .iter()
        .map(|s| s.trim().to_string())
        .collect();
    assert_eq!(trimmed, set(&["please sit", "sit"]));
}

#[test]
fn imported_rules_contribute_words() {
    let loader = MemoryLoader::new()
        .with_file("rooms.txt", "$Main = ignored\n$Room = kitchen | office")
        .with_file("main.txt", "; import rooms.txt\n$Main = go to the $Room");
    let grammar = Grammar::load("main.txt", &loader).unwrap();
    assert_eq!(
        language(&grammar, 100),
        set(&["go to the kitchen", "go to the office"])
    );
}

#[test]
fn wildcard_markers_are_passed_through() {
    let grammar = Grammar::parse("t.txt", "$Main = bring {object 1} to ({name 2}|the {location room})").unwrap();
    assert_eq!(
        language(&grammar, 100),
        set(&[
            "bring {object 1} to the {location room}",
            "bring {object 1} to {name 2}",
        ])
    );
}

#[test]
fn mutual_recursion_hits_the_bound() {
    let grammar = Grammar::parse("t.txt", "$Main = $A\n$A = a $B\n$B = b $A").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = Generator::new(&grammar)
        .with_max_depth(50)
        .generate(&mut rng)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RecursionLimit(50)));
    assert!(err.is_attempt_local());
}
