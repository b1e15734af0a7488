//! Integration tests for the taskgen_engine crate.
//!
//! Each test drives a one-line grammar through [`TaskGenerator`] against a
//! small household fixture:
//! - Identity groups
//! - Where-clause constraints
//! - Pronoun agreement
//! - Obfuscation and disclosure
//! - Dependent wildcards

mod constraints;
mod dependencies;
mod identity;
mod obfuscation;
mod pronouns;

use taskgen_engine::{GeneratorConfig, Task, TaskGenerator};
use taskgen_foundation::{Error, ErrorKind, Gender, Value};
use taskgen_grammar::Grammar;
use taskgen_storage::{EntityKey, EntityStore, ObjectType};

/// Object names by room, as laid out by [`store`].
pub const OBJECT_ROOMS: [(&str, &str); 7] = [
    ("coke", "kitchen"),
    ("milk", "kitchen"),
    ("chips", "kitchen"),
    ("cookies", "kitchen"),
    ("pen", "office"),
    ("stapler", "office"),
    ("pillow", "bedroom"),
];

pub fn store() -> EntityStore {
    let mut store = EntityStore::new();
    let kitchen = store.add_room("kitchen");
    let office = store.add_room("office");
    let bedroom = store.add_room("bedroom");

    let fridge = store.add_location("fridge", kitchen, true, false).unwrap();
    let counter = store.add_location("counter", kitchen, true, true).unwrap();
    let desk = store.add_location("desk", office, true, false).unwrap();
    store.add_location("door", office, false, true).unwrap();
    let bed = store.add_location("bed", bedroom, true, false).unwrap();

    let drinks = store.add_category("drinks", fridge).unwrap();
    let snacks = store.add_category("snacks", counter).unwrap();
    let stationery = store.add_category("stationery", desk).unwrap();
    let linens = store.add_category("linens", bed).unwrap();

    store.add_object("coke", drinks, ObjectType::Known).unwrap();
    store.add_object("milk", drinks, ObjectType::Alike).unwrap();
    store.add_object("chips", snacks, ObjectType::Known).unwrap();
    store.add_object("cookies", snacks, ObjectType::Special).unwrap();
    let pen = store.add_object("pen", stationery, ObjectType::Known).unwrap();
    store.add_object("stapler", stationery, ObjectType::Alike).unwrap();
    store.add_object("pillow", linens, ObjectType::Known).unwrap();
    store
        .set_attribute(EntityKey::Object(pen), "weight", Value::from(0.1))
        .unwrap();

    store.add_person("Linda", Gender::Female);
    store.add_person("Mary", Gender::Female);
    store.add_person("John", Gender::Male);
    store.add_person("Peter", Gender::Male);
    store.add_gesture("waving");
    store.add_question("What day is it?", "Friday");
    store
}

pub fn generator_with(main: &str, config: GeneratorConfig) -> TaskGenerator {
    let grammar = Grammar::parse("test.txt", &format!("$Main = {main}")).unwrap();
    TaskGenerator::new(vec![grammar], store(), config)
}

pub fn generator(main: &str) -> TaskGenerator {
    generator_with(main, GeneratorConfig::new().with_seed(7))
}

/// Generates `count` tasks from one generator.
pub fn tasks(main: &str, count: usize) -> Vec<Task> {
    let mut generator = generator(main);
    (0..count).map(|_| generator.generate().unwrap()).collect()
}

/// Rendered text of every token whose keycode starts with `domain`.
pub fn rendered<'t>(task: &'t Task, domain: &str) -> Vec<&'t str> {
    task.tokens()
        .iter()
        .filter(|t| t.keycode().is_some_and(|k| k.starts_with(domain)))
        .map(|t| t.text())
        .collect()
}

/// Unwraps the error that ended the last attempt.
pub fn last_error(err: Error) -> Error {
    match err.kind {
        ErrorKind::NoTaskGenerated { last, .. } => *last,
        other => panic!("unexpected {other:?}"),
    }
}
