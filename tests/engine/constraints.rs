//! Every drawn entity satisfies its group's filters.

use taskgen_foundation::ErrorKind;

use crate::{generator, last_error, rendered, tasks};

fn single(main: &str, domain: &str, runs: usize) -> Vec<String> {
    tasks(main, runs)
        .iter()
        .map(|task| {
            let texts = rendered(task, domain);
            assert_eq!(texts.len(), 1, "{task}");
            texts[0].to_string()
        })
        .collect()
}

#[test]
fn declared_property_filters_candidates() {
    for name in single(r#"take the {object where category = "drinks"}"#, "object", 30) {
        assert!(["coke", "milk"].contains(&name.as_str()), "{name}");
    }
}

#[test]
fn subtype_and_clause_combine() {
    for name in single(r#"go to the {location placement where room = "office"}"#, "location", 20) {
        assert_eq!(name, "desk");
    }
    for name in single(r#"meet {name female where name != "linda"}"#, "name", 20) {
        assert_eq!(name, "Mary");
    }
}

#[test]
fn object_subtype_filters_by_type() {
    for name in single("grab the {object special}", "object", 10) {
        assert_eq!(name, "cookies");
    }
    for name in single(r#"grab the {object where type != "known" and category = "stationery"}"#, "object", 10) {
        assert_eq!(name, "stapler");
    }
}

#[test]
fn attributes_can_be_compared() {
    for name in single("lift the {object where weight < 0.5}", "object", 10) {
        assert_eq!(name, "pen");
    }
}

#[test]
fn unsatisfiable_clause_exhausts_the_pool() {
    let err = generator(r#"find the {object where category = "tools"}"#)
        .generate()
        .unwrap_err();
    match last_error(err).kind {
        ErrorKind::PoolExhausted { keycode, filter } => {
            assert!(keycode.starts_with("object"));
            assert_eq!(filter.as_deref(), Some(r#"where category = "tools""#));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn malformed_clause_fails_the_attempt() {
    let err = generator("find the {object where category ==}").generate().unwrap_err();
    assert!(matches!(last_error(err).kind, ErrorKind::ConstraintParse { .. }));
}

#[test]
fn unknown_names_and_subtypes_fail_the_attempt() {
    for main in ["bring the {thing}", "bring the {object heavy}", "wait {void beacon}"] {
        let err = generator(main).generate().unwrap_err();
        let last = last_error(err);
        assert!(
            matches!(last.kind, ErrorKind::UnknownWildcard(_) | ErrorKind::UnknownSubtype { .. }),
            "{main}: {last}"
        );
    }
}

#[test]
fn known_objects_only() {
    for name in single(r#"{object where type="known"}"#, "object", 40) {
        assert!(["coke", "chips", "pen", "pillow"].contains(&name.as_str()), "{name}");
    }
}
