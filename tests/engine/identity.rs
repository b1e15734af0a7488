//! Occurrences sharing a keycode render one entity; distinct groups never share.

use std::collections::{BTreeMap, BTreeSet};

use taskgen_foundation::ErrorKind;

use crate::{generator, generator_with, rendered, tasks};
use taskgen_engine::GeneratorConfig;

#[test]
fn shared_keycodes_render_the_same_entity() {
    for task in tasks("bring {object 1} to {name 1} then give {name 1} the {object 1}.", 40) {
        let mut by_keycode: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for token in task.tokens() {
            if let Some(keycode) = token.keycode() {
                by_keycode.entry(keycode).or_default().insert(token.text());
            }
        }
        assert_eq!(by_keycode.len(), 2, "{task}");
        for (keycode, texts) in by_keycode {
            assert_eq!(texts.len(), 1, "{keycode} in {task}");
        }
        assert_eq!(task.assignments().len(), 2);
    }
}

#[test]
fn distinct_groups_draw_distinct_entities() {
    let main = "{object} {object} {object} {object} {object} {object} {object}";
    for task in tasks(main, 10) {
        let objects: BTreeSet<&str> = rendered(&task, "object").into_iter().collect();
        assert_eq!(objects.len(), 7, "{task}");
    }
}

#[test]
fn one_group_too_many_exhausts_the_pool() {
    let main = "{object} {object} {object} {object} {object} {object} {object} {object}";
    let err = generator(main).generate().unwrap_err();
    match err.kind {
        ErrorKind::NoTaskGenerated { attempts, last } => {
            assert_eq!(attempts, GeneratorConfig::new().max_attempts);
            assert!(matches!(last.kind, ErrorKind::PoolExhausted { filter: None, .. }));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn auto_ids_start_above_explicit_ids() {
    let task = generator("{object 5} and {object}").generate().unwrap();
    let keycodes: Vec<_> = task.tokens().iter().filter_map(|t| t.keycode()).collect();
    assert_eq!(keycodes, vec!["object0005", "object0006"]);
}

#[test]
fn same_id_in_different_domains_is_not_shared() {
    let task = generator("{object 1} near the {location placement 1}").generate().unwrap();
    let keycodes: Vec<&str> = task.assignments().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keycodes, vec!["object0001", "location0001"]);
}

#[test]
fn ids_never_repeat_across_tasks() {
    let mut generator = generator_with("{name} meets {name}", GeneratorConfig::new().with_seed(3));
    let mut seen = BTreeSet::new();
    for _ in 0..5 {
        let task = generator.generate().unwrap();
        for (keycode, _) in task.assignments() {
            assert!(seen.insert(keycode.clone()), "{keycode} reused");
        }
    }
    assert_eq!(seen.len(), 10);
}
