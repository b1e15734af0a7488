//! Loading, merging and normalization across files.

use taskgen_foundation::{ErrorKind, Tier};
use taskgen_grammar::{Grammar, MemoryLoader};

fn loader() -> MemoryLoader {
    MemoryLoader::new()
        .with_file(
            "shared/verbs.txt",
            "\
/* Verbs shared by every errand. */
$Main = never chosen
$Take = (take|grab) | pick up
$Go = go to",
        )
        .with_file(
            "shared/polite.txt",
            "% polite openers\n$Polite = please | (could|would) you",
        )
        .with_file(
            "shared/all.txt",
            "# load polite.txt\n; import verbs.txt\n$Go = walk to",
        )
        .with_file(
            "errands.txt",
            "\
// grammar name Errands
// grammar tier Moderate
// import shared/all.txt
$Main = $Polite $Take the {object} | $Go the {location room}",
        )
}

#[test]
fn nested_imports_resolve_relative_to_their_file() {
    let grammar = Grammar::load("errands.txt", &loader()).unwrap();
    assert_eq!(grammar.name(), "Errands");
    assert_eq!(grammar.tier(), Tier::Moderate);
    assert_eq!(grammar.rule("Go").unwrap(), ["walk to", "go to"]);
    assert!(grammar.rule("Polite").is_some());
}

#[test]
fn imported_start_rules_never_compete() {
    let grammar = Grammar::load("errands.txt", &loader()).unwrap();
    let main = grammar.rule("Main").unwrap();
    assert_eq!(main.len(), 2);
    assert!(!main.iter().any(|alt| alt.contains("never chosen")));
}

#[test]
fn no_alternative_keeps_a_group() {
    let grammar = Grammar::load("errands.txt", &loader()).unwrap();
    for (name, alternatives) in grammar.rules().iter() {
        for alternative in alternatives {
            assert!(!alternative.contains('('), "${name} = {alternative}");
            assert!(!alternative.contains('|'), "${name} = {alternative}");
        }
    }
}

#[test]
fn synthetic_rules_carry_group_branches() {
    let grammar = Grammar::load("errands.txt", &loader()).unwrap();
    let take = grammar.rule("Take").unwrap();
    assert_eq!(take.len(), 3);
    assert!(take.contains(&"take".to_string()));
    assert!(take.contains(&"grab".to_string()));
    assert!(take.contains(&"pick up".to_string()));

    let polite = grammar.rule("Polite").unwrap();
    let reference = polite
        .iter()
        .find(|alt| alt.ends_with(" you"))
        .unwrap()
        .trim_end_matches(" you")
        .trim_start_matches('$');
    assert_eq!(grammar.rule(reference).unwrap(), ["could", "would"]);
}

#[test]
fn library_files_without_start_rule_fail_alone() {
    let err = Grammar::load("shared/polite.txt", &loader()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingStartRule(ref name) if name == "shared/polite.txt"));
}

#[test]
fn self_import_is_a_cycle() {
    let loader = MemoryLoader::new().with_file("me.txt", "; import me.txt\n$Main = me");
    let err = Grammar::load("me.txt", &loader).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ImportCycle(ref path) if path == "me.txt"));
}

#[test]
fn import_as_is_rejected_with_its_file() {
    let loader = MemoryLoader::new()
        .with_file("people.txt", "$Person = Alex")
        .with_file("main.txt", "// import people.txt as $Person\n$Main = find $Person");
    let err = Grammar::load("main.txt", &loader).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedDirective(_)));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("main.txt"));
    assert_eq!(context.line, Some(1));
}

#[test]
fn parse_errors_carry_the_import_chain() {
    let loader = MemoryLoader::new()
        .with_file("c.txt", "$Main = ok\n$Broken = (a|b")
        .with_file("b.txt", "; import c.txt\n$B = b")
        .with_file("a.txt", "; import b.txt\n$Main = $B");
    let err = Grammar::load("a.txt", &loader).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GrammarParse { line: 2, .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("c.txt"));
    assert_eq!(context.stack, vec!["b.txt", "a.txt"]);
}

#[test]
fn escaped_metacharacters_survive_as_text() {
    let grammar = Grammar::parse("t.txt", r"$Main = press \(A\) \| (B|C)").unwrap();
    let main = grammar.rule("Main").unwrap();
    assert_eq!(main.len(), 1);
    assert!(main[0].starts_with("press (A) | $parent_"));
}

#[test]
fn wildcards_keep_their_inner_syntax() {
    let text = r#"$Main = put the {object where type = "known" meta: (fragile|heavy); handle with care} down"#;
    let grammar = Grammar::parse("t.txt", text).unwrap();
    assert_eq!(
        grammar.rule("Main").unwrap(),
        [r#"put the {object where type = "known" meta: (fragile|heavy); handle with care} down"#]
    );
}
