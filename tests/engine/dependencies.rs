//! Wildcards whose clauses name other wildcards.

use crate::{OBJECT_ROOMS, generator, generator_with, rendered, tasks};
use taskgen_engine::GeneratorConfig;

fn room_of(object: &str) -> &'static str {
    OBJECT_ROOMS
        .iter()
        .find(|(name, _)| *name == object)
        .map(|(_, room)| *room)
        .unwrap()
}

#[test]
fn clause_sees_the_bound_value() {
    let main = "take the {object 1 where room = {location room 2}} from the {location room 2}";
    for task in tasks(main, 30) {
        let object = rendered(&task, "object")[0];
        let room = rendered(&task, "location")[0];
        assert_eq!(room_of(object), room, "{task}");
        assert!(task.unresolved().is_empty());
    }
}

#[test]
fn chains_resolve_in_dependency_order() {
    let main = "take a {object where category = {category 1}} from the {category 1 where location = {location placement 2}} on the {location placement 2}";
    for task in tasks(main, 30) {
        let object = rendered(&task, "object")[0];
        let category = rendered(&task, "category")[0];
        let placement = rendered(&task, "location")[0];
        let expected = match placement {
            "fridge" => "drinks",
            "counter" => "snacks",
            "desk" => "stationery",
            "bed" => "linens",
            other => panic!("{other} is not a placement"),
        };
        assert_eq!(category, expected, "{task}");
        assert!(["coke", "milk", "chips", "cookies", "pen", "stapler", "pillow"].contains(&object));
        let object_category = match object {
            "coke" | "milk" => "drinks",
            "chips" | "cookies" => "snacks",
            "pen" | "stapler" => "stationery",
            _ => "linens",
        };
        assert_eq!(object_category, category, "{task}");
    }
}

#[test]
fn substituted_names_are_quoted() {
    let main = "{name 1 where name != {name 2}} and {name 2}";
    for task in tasks(main, 10) {
        let names = rendered(&task, "name");
        assert_eq!(names.len(), 2);
        assert_ne!(names[0], names[1]);
    }
}

#[test]
fn mutual_dependencies_stay_unresolved() {
    let main = "{object 1 where name != {object 2}} then {object 2 where name != {object 1}}";
    let task = generator(main).generate().unwrap();
    assert_eq!(task.unresolved().len(), 2);
    assert!(task.assignments().is_empty());
    assert_eq!(
        task.to_string(),
        "{object 1 where name != {object 2}} then {object 2 where name != {object 1}}"
    );
}

#[test]
fn pass_bound_limits_resolution() {
    let main = "take the {object where room = {location room 1}} from the {location room 1}";
    let config = GeneratorConfig::new().with_max_resolution_passes(0);
    let task = generator_with(main, config).generate().unwrap();
    assert_eq!(task.unresolved().len(), 1);
    assert!(task.to_string().starts_with("take the {object where room"));
}
