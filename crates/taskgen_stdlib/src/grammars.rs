//! Sample grammars.
//!
//! Each tier file imports `common.txt` for shared verbs and phrasing.

use taskgen_foundation::Result;
use taskgen_grammar::{Grammar, MemoryLoader};

/// Shared phrasing imported by every sample grammar.
pub const COMMON: &str = r#"
; Shared verbs. Imported, never generated from directly.
$Polite = (please|could you|)
$Go = (go|navigate|move) to
$Take = (take|grab|pick up|get)
$Bring = (bring|deliver)
$Find = (find|look for|locate)
$Tell = (tell|say)
$Meet = (meet|greet|introduce yourself to)
"#;

/// Single-step errands.
pub const EASY: &str = r#"
; grammar name Simple errands
; grammar tier easy
; import common.txt

$Main = $Polite $Go the {location placement}
$Main = $Take the {object} and $Bring it to the {location placement}
$Main = $Find {name} in the {location room}
$Main = $Meet {name} at the {location beacon}
"#;

/// Two-step errands with constraints and pronouns.
pub const MODERATE: &str = r#"
; grammar name Fetch and deliver
; grammar tier moderate
; import common.txt

$Main = $Polite $Find the {object 1 where room = {location room 2}} in the {location room 2} and $Bring it to {name 3}
$Main = $Find {name 1} and ask {pron obj} to follow you to the {location beacon}
$Main = $Take the {object where type = "known"} (to|and place it on) the {location placement}
$Main = $Meet {name 1}, answer {pron pos} {question}, and wait at the {location beacon}
"#;

/// Errands that name things vaguely.
pub const HIGH: &str = r#"
; grammar name Vague errands
; grammar tier high
; import common.txt

$Main = $Polite $Go the {location? placement}, $Take the {object?} and $Bring it to {name}
$Main = $Find the person {gesture} in the {location room} and $Tell them $Fact
$Main = $Take one of the {category} and put it on the {location placement}

$Fact = (the time|your name|a joke|the day of the week)
"#;

/// Chained errands with shared identities and metadata notes.
pub const EXPERT: &str = r#"
; grammar name Chained errands
; grammar tier expert
; import common.txt

$Main = {void meta: {name 1} is waiting at the {location beacon 2}} $Go the {location beacon 2}, $Meet {name 1}, and ask {pron obj} which {object? 3 where room = {location room 4}} to $Take from the {location room 4}
$Main = $Bring the {object 1 where type != "special"} to {name 2}, then $Tell {name 2} the answer to the {question}
$Main = $Find {name female 1} and ask {pron obj} to $Take the {object? where type = "alike"} (to|into) the {location room}
"#;

/// Path and text of every tier grammar, lowest tier first.
pub const SAMPLE_GRAMMARS: [(&str, &str); 4] = [
    ("easy.txt", EASY),
    ("moderate.txt", MODERATE),
    ("high.txt", HIGH),
    ("expert.txt", EXPERT),
];

/// Returns every sample file, `common.txt` included, as an in-memory loader.
#[must_use]
pub fn loader() -> MemoryLoader {
    SAMPLE_GRAMMARS
        .iter()
        .fold(MemoryLoader::new().with_file("common.txt", COMMON), |loader, (path, text)| {
            loader.with_file(*path, *text)
        })
}

/// Loads and normalizes every tier grammar.
///
/// # Errors
/// Returns an error if a built-in grammar fails to build.
pub fn grammars() -> Result<Vec<Grammar>> {
    let loader = loader();
    SAMPLE_GRAMMARS
        .iter()
        .map(|(path, _)| Grammar::load(path, &loader))
        .collect()
}
