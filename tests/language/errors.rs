//! Malformed clauses.

use taskgen_foundation::ErrorKind;
use taskgen_language::Constraint;

fn column_of(clause: &str) -> usize {
    match Constraint::parse(clause).unwrap_err().kind {
        ErrorKind::ConstraintParse { column, .. } => column,
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unquoted_string_is_rejected() {
    assert_eq!(column_of("type = known"), 8);
}

#[test]
fn missing_comparator() {
    assert_eq!(column_of("type \"known\""), 6);
}

#[test]
fn trailing_connective() {
    assert!(Constraint::parse("type = \"known\" and").is_err());
}

#[test]
fn unterminated_string() {
    assert!(Constraint::parse("name = \"Linda").is_err());
}

#[test]
fn empty_clause() {
    assert!(Constraint::parse("   ").is_err());
}
