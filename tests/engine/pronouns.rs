//! Pronouns agree with the nearest preceding top-level person.

use crate::{rendered, tasks};

fn pronouns(main: &str) -> Vec<String> {
    tasks(main, 12)
        .iter()
        .map(|task| rendered(task, "pron").concat())
        .collect()
}

#[test]
fn follows_the_antecedent_gender() {
    assert!(pronouns("ask {name female} to follow you, then thank {pron obj}").iter().all(|p| p == "her"));
    assert!(pronouns("find {name male} and ask for {pron pos} name").iter().all(|p| p == "his"));
    assert!(pronouns("find {name male}, {pron} is waiting").iter().all(|p| p == "he"));
}

#[test]
fn random_gender_still_agrees() {
    for task in tasks("tell {name 1} that {pron} should greet {name 1}", 30) {
        let text = task.to_string();
        let name = rendered(&task, "name")[0];
        let expected = if ["Linda", "Mary"].contains(&name) { "she" } else { "he" };
        assert_eq!(rendered(&task, "pron"), [expected], "{text}");
    }
}

#[test]
fn things_are_neutral() {
    assert!(pronouns("pick up the {object} and bring {pron obj} here").iter().all(|p| p == "it"));
    assert!(pronouns("{pron} is sunny").iter().all(|p| p == "it"));
}

#[test]
fn voids_and_nested_markers_are_skipped() {
    let main = "greet {name female} {void meta: ask about {name male}} and ask {pron obj} to wait";
    assert!(pronouns(main).iter().all(|p| p == "her"));
}

#[test]
fn things_between_person_and_pronoun_are_skipped() {
    let main = "meet {name male} at the {location beacon} and follow {pron obj}";
    assert!(pronouns(main).iter().all(|p| p == "him"));
    let main = "bring {name female} the {object} from the {location}, then thank {pron obj}";
    assert!(pronouns(main).iter().all(|p| p == "her"));
}

#[test]
fn shared_pronoun_renders_one_form() {
    let main = "{name female} met {name male}, {pron 1} smiled and waved at {pron 1}";
    assert!(pronouns(main).iter().all(|p| p == "hehe"));
}

#[test]
fn nearest_antecedent_wins() {
    let main = "{name female} gave {name male} the {object}, {pron} dropped {pron obj}";
    assert!(pronouns(main).iter().all(|p| p == "hehim"));
    let main = "tell {name female} to meet {name male} and follow {pron obj}";
    assert!(pronouns(main).iter().all(|p| p == "him"));
}

#[test]
fn laughing_person() {
    for task in tasks("{name 1} laughed because {pron} was happy.", 20) {
        let name = rendered(&task, "name")[0];
        let pronoun = if ["Linda", "Mary"].contains(&name) { "she" } else { "he" };
        assert_eq!(task.to_string(), format!("{name} laughed because {pronoun} was happy."));
    }
}
