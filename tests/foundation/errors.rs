//! Integration tests for Error types
//!
//! Tests error construction, display, context, and retry classification.

use taskgen_foundation::{Error, ErrorContext, ErrorKind, Tier};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_grammar_parse() {
    let err = Error::grammar_parse("unclosed '('", 7);
    assert!(matches!(err.kind, ErrorKind::GrammarParse { line: 7, .. }));
    let msg = format!("{err}");
    assert!(msg.contains("line 7"));
    assert!(msg.contains("unclosed"));
}

#[test]
fn error_pool_exhausted_names_filter() {
    let err = Error::pool_exhausted("object0001", Some("known where room = \"kitchen\"".to_string()));
    let msg = format!("{err}");
    assert!(msg.contains("object0001"));
    assert!(msg.contains("matching known"));

    let bare = Error::pool_exhausted("gesture0002", None);
    assert_eq!(format!("{bare}"), "no candidate left for gesture0002");
}

#[test]
fn error_unknown_subtype() {
    let err = Error::unknown_subtype("location", "garage");
    assert!(matches!(err.kind, ErrorKind::UnknownSubtype { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("garage"));
    assert!(msg.contains("location"));
}

#[test]
fn error_no_task_generated_wraps_last() {
    let err = Error::new(ErrorKind::NoTaskGenerated {
        attempts: 3,
        last: Box::new(Error::recursion_limit(1000)),
    });
    let msg = format!("{err}");
    assert!(msg.contains("3 attempts"));
    assert!(msg.contains("1000"));
}

#[test]
fn error_no_eligible_grammar_names_tier() {
    let err = Error::new(ErrorKind::NoEligibleGrammar(Tier::Moderate));
    assert!(format!("{err}").contains("moderate"));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn frames_accumulate() {
    let err = Error::io("common.txt", "no such grammar")
        .in_frame("b.txt")
        .in_frame("a.txt");
    let context = err.context.expect("context");
    assert_eq!(context.stack, vec!["b.txt", "a.txt"]);
}

#[test]
fn context_carries_position() {
    let err = Error::grammar_parse("bad", 2).with_context(
        ErrorContext::new()
            .with_source("grammar.txt")
            .with_position(2, 5),
    );
    let context = err.context.expect("context");
    assert_eq!(context.source.as_deref(), Some("grammar.txt"));
    assert_eq!(context.line, Some(2));
    assert_eq!(context.column, Some(5));
}

// =============================================================================
// Retry classification
// =============================================================================

#[test]
fn attempt_local_errors() {
    assert!(Error::recursion_limit(10).is_attempt_local());
    assert!(Error::pool_exhausted("name0001", None).is_attempt_local());
    assert!(Error::unknown_wildcard("robot").is_attempt_local());
    assert!(Error::constraint_parse("expected literal", 4).is_attempt_local());
}

#[test]
fn structural_errors_are_not_retried() {
    assert!(!Error::missing_start_rule("g").is_attempt_local());
    assert!(!Error::import_cycle("a.txt").is_attempt_local());
    assert!(!Error::io("x", "gone").is_attempt_local());
    assert!(!Error::new(ErrorKind::NoEligibleGrammar(Tier::Easy)).is_attempt_local());
}
