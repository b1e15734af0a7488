//! Where-clauses evaluated against the entity store.

use taskgen_foundation::{Domain, Entity, Gender, Value};
use taskgen_language::Constraint;
use taskgen_storage::{EntityKey, EntityStore, ObjectType};

fn store() -> EntityStore {
    let mut store = EntityStore::new();
    let kitchen = store.add_room("kitchen");
    let office = store.add_room("office");
    let fridge = store.add_location("fridge", kitchen, true, false).unwrap();
    let desk = store.add_location("desk", office, true, true).unwrap();
    let drinks = store.add_category("drinks", fridge).unwrap();
    let stationery = store.add_category("stationery", desk).unwrap();
    let coke = store.add_object("coke", drinks, ObjectType::Known).unwrap();
    store.add_object("milk", drinks, ObjectType::Alike).unwrap();
    store.add_object("pen", stationery, ObjectType::Special).unwrap();
    store
        .set_attribute(EntityKey::Object(coke), "weight", Value::from(0.5))
        .unwrap();
    store.add_person("Linda", Gender::Female);
    store.add_person("John", Gender::Male);
    store
}

fn matching(store: &EntityStore, domain: Domain, clause: &str) -> Vec<String> {
    let constraint = Constraint::parse(clause).unwrap();
    let mut names: Vec<String> = store
        .keys(domain)
        .into_iter()
        .map(|key| store.entity(key).unwrap())
        .filter(|view| constraint.matches(view))
        .map(|view| view.name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn declared_properties() {
    let store = store();
    assert_eq!(matching(&store, Domain::Object, "type = \"known\""), vec!["coke"]);
    assert_eq!(matching(&store, Domain::Object, "category = 'drinks'"), vec!["coke", "milk"]);
    assert_eq!(matching(&store, Domain::Object, "room = \"office\""), vec!["pen"]);
    assert_eq!(matching(&store, Domain::Object, "location = \"fridge\""), vec!["coke", "milk"]);
    assert_eq!(matching(&store, Domain::Name, "gender = \"male\""), vec!["John"]);
}

#[test]
fn string_comparison_ignores_case() {
    let store = store();
    assert_eq!(matching(&store, Domain::Name, "name = \"LINDA\""), vec!["Linda"]);
}

#[test]
fn boolean_properties() {
    let store = store();
    assert_eq!(matching(&store, Domain::Location, "beacon = true"), vec!["desk"]);
    assert_eq!(
        matching(&store, Domain::Location, "type = \"location\" and placement = true"),
        vec!["desk", "fridge"]
    );
}

#[test]
fn attributes_and_numbers() {
    let store = store();
    assert_eq!(matching(&store, Domain::Object, "weight < 1"), vec!["coke"]);
    assert_eq!(matching(&store, Domain::Object, "weight = null"), vec!["milk", "pen"]);
    assert_eq!(matching(&store, Domain::Object, "weight != null"), vec!["coke"]);
}

#[test]
fn missing_property_never_matches_a_string() {
    let store = store();
    assert!(matching(&store, Domain::Name, "color = \"red\"").is_empty());
    assert_eq!(
        matching(&store, Domain::Name, "not color = \"red\""),
        vec!["John", "Linda"]
    );
}

#[test]
fn connectives_fold_left() {
    let store = store();
    assert_eq!(
        matching(&store, Domain::Object, "type = \"known\" or type = \"special\" and room = \"office\""),
        vec!["pen"]
    );
    assert_eq!(
        matching(&store, Domain::Object, "type = \"alike\" xor room = \"kitchen\""),
        vec!["coke"]
    );
}
