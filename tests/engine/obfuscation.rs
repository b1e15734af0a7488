//! Obfuscated wildcards render a stand-in and disclose the concrete name.

use crate::{generator, rendered};

#[test]
fn placement_renders_its_room() {
    let task = generator(r#"go to the {location? placement where room = "office"}"#)
        .generate()
        .unwrap();
    assert_eq!(task.to_string(), "go to the office");
    assert_eq!(task.metadata(), vec!["office: desk"]);
    assert_eq!(task.assignments()[0].1, "desk");
}

#[test]
fn stand_ins_by_domain() {
    for (main, text, disclosed) in [
        (r#"{object? where name = "pen"}"#, "stationery", "stationery: pen"),
        (r#"{location? room where name = "bedroom"}"#, "room", "room: bedroom"),
        (r#"{name? female where name = "linda"}"#, "a person", "a person: Linda"),
        ("{category? where name = \"snacks\"}", "objects", "objects: snacks"),
    ] {
        let task = generator(main).generate().unwrap();
        assert_eq!(task.to_string(), text, "{main}");
        assert_eq!(task.metadata(), vec![disclosed], "{main}");
    }
}

#[test]
fn only_the_obfuscated_occurrence_is_vague() {
    let main = r#"find the {object? 1 where name = "coke"} and bring the {object 1} back"#;
    let task = generator(main).generate().unwrap();
    assert_eq!(rendered(&task, "object"), ["drinks", "coke"]);
    assert_eq!(task.to_string(), "find the drinks and bring the coke back");
    assert_eq!(task.metadata(), vec!["drinks: coke"]);
}

#[test]
fn meta_text_shows_the_stand_in() {
    let main = r#"{void meta: look in the {location? 1}} go to the {location placement 1 where name = "bed"}"#;
    let task = generator(main).generate().unwrap();
    assert_eq!(task.to_string(), "go to the bed");
    assert_eq!(task.metadata(), vec!["look in the bedroom"]);
}
