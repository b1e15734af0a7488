//! Integration tests for Value, Tier and Domain
//!
//! Tests coercions, ordering, and keyword lookup.

use taskgen_foundation::{Domain, Tier, Value};

// =============================================================================
// Value
// =============================================================================

#[test]
fn value_kinds() {
    assert_eq!(Value::Null.kind_name(), "null");
    assert_eq!(Value::from(true).kind_name(), "boolean");
    assert_eq!(Value::from(1.5).kind_name(), "number");
    assert_eq!(Value::from("x").kind_name(), "string");
}

#[test]
fn value_coercions() {
    assert_eq!(Value::from("42").as_number(), Some(42.0));
    assert_eq!(Value::from("False").as_bool(), Some(false));
    assert_eq!(Value::from(7).as_str(), None);
    assert!(Value::from("Living Room").text_eq("living room"));
}

#[test]
fn value_ordering_within_kind() {
    assert!(Value::from(1) < Value::from(2));
    assert!(Value::from("apple") < Value::from("banana"));
    assert_eq!(Value::from(1).partial_cmp(&Value::from("1")), None);
}

// =============================================================================
// Tier
// =============================================================================

#[test]
fn tiers_are_ordered() {
    assert!(Tier::Easy < Tier::Moderate);
    assert!(Tier::Moderate < Tier::High);
    assert!(Tier::High < Tier::Expert);
    assert_eq!(Tier::default(), Tier::Easy);
}

#[test]
fn tier_parsing_and_menu_index() {
    assert_eq!("Moderate".parse::<Tier>(), Ok(Tier::Moderate));
    assert_eq!("4".parse::<Tier>(), Ok(Tier::Expert));
    assert!("legendary".parse::<Tier>().is_err());
    assert_eq!(Tier::from_index(1), Some(Tier::Easy));
    assert_eq!(Tier::from_index(0), None);
    assert_eq!(Tier::from_index(5), None);
    assert_eq!(Tier::High.to_string(), "high");
}

// =============================================================================
// Domain
// =============================================================================

#[test]
fn domain_keywords_round_trip() {
    for domain in Domain::POOLED {
        assert_eq!(Domain::from_keyword(domain.keyword()), Some(domain));
        assert!(domain.is_pooled());
    }
    assert_eq!(Domain::from_keyword("pron"), Some(Domain::Pronoun));
    assert!(!Domain::Void.is_pooled());
    assert_eq!(Domain::from_keyword("robot"), None);
}
