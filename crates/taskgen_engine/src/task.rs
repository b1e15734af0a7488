//! Token assembly.

use std::fmt;

use taskgen_foundation::{Entity, Result, Tier};
use taskgen_storage::EntityStore;

use crate::group::{Binding, Groups};
use crate::obfuscate::disclosure;
use crate::wildcard::Occurrence;

/// One piece of a finished task: literal text or a rendered wildcard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    text: String,
    keycode: Option<String>,
    metadata: Vec<String>,
}

impl Token {
    /// Creates a literal text token.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keycode: None,
            metadata: Vec::new(),
        }
    }

    /// Creates a token for a rendered wildcard.
    #[must_use]
    pub fn wildcard(text: impl Into<String>, keycode: impl Into<String>, metadata: Vec<String>) -> Self {
        Self {
            text: text.into(),
            keycode: Some(keycode.into()),
            metadata,
        }
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the keycode of the wildcard this token renders.
    #[must_use]
    pub fn keycode(&self) -> Option<&str> {
        self.keycode.as_deref()
    }

    /// Returns the metadata attached to this token.
    #[must_use]
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    /// Returns true for literal text.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.keycode.is_none()
    }
}

/// A generated task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    grammar: String,
    tier: Tier,
    tokens: Vec<Token>,
    assignments: Vec<(String, String)>,
    unresolved: Vec<String>,
}

impl Task {
    /// Returns the tokens in sentence order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the name of the grammar the task came from.
    #[must_use]
    pub fn grammar_name(&self) -> &str {
        &self.grammar
    }

    /// Returns the tier of the grammar the task came from.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns every token's metadata, in order.
    #[must_use]
    pub fn metadata(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .flat_map(|t| t.metadata.iter().map(String::as_str))
            .collect()
    }

    /// Returns `(keycode, entity name)` for every group bound to an entity.
    #[must_use]
    pub fn assignments(&self) -> &[(String, String)] {
        &self.assignments
    }

    /// Returns the keycodes of groups whose dependencies never resolved.
    /// Their markers appear verbatim in the text.
    #[must_use]
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.tokens.iter().map(Token::text).collect();
        let mut words = text.split_whitespace();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                write!(f, " {word}")?;
            }
        }
        Ok(())
    }
}

/// Builds a task from a sentence and its resolved groups.
///
/// # Errors
/// Returns an error if a bound entity is not in `store`.
pub fn assemble(
    grammar: &str,
    tier: Tier,
    sentence: &str,
    occurrences: &[Occurrence],
    groups: &Groups,
    unresolved: Vec<String>,
    store: &EntityStore,
) -> Result<Task> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    for (index, occurrence) in occurrences.iter().enumerate() {
        let Some(span) = occurrence.span else {
            continue;
        };
        if span.start > pos {
            tokens.push(Token::literal(&sentence[pos..span.start]));
        }
        tokens.push(render(index, span.text(sentence), occurrences, groups, store)?);
        pos = span.end;
    }
    if pos < sentence.len() {
        tokens.push(Token::literal(&sentence[pos..]));
    }

    let mut assignments = Vec::new();
    for group in groups.as_slice() {
        if let Some(Binding::Entity(key)) = group.binding {
            assignments.push((group.keycode.clone(), store.entity(key)?.name().to_string()));
        }
    }

    Ok(Task {
        grammar: grammar.to_string(),
        tier,
        tokens,
        assignments,
        unresolved,
    })
}

fn render(
    index: usize,
    marker: &str,
    occurrences: &[Occurrence],
    groups: &Groups,
    store: &EntityStore,
) -> Result<Token> {
    let occurrence = &occurrences[index];
    let group = groups.group_of(index);
    let Some(binding) = &group.binding else {
        return Ok(Token::literal(marker));
    };

    let mut metadata = Vec::new();
    if let Some(meta) = &occurrence.meta {
        let mut values = Vec::new();
        for reference in meta.refs() {
            values.push((reference, display(reference, occurrences, groups, store)?));
        }
        let text = meta.render(|reference, _| {
            values
                .iter()
                .find(|(r, _)| *r == reference)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        });
        if !text.is_empty() {
            metadata.push(text);
        }
    }

    let text = match binding {
        Binding::Void => String::new(),
        Binding::Pronoun(form) => (*form).to_string(),
        Binding::Entity(key) => {
            let view = store.entity(*key)?;
            metadata.extend(view.metadata());
            let name = view.name();
            match (&group.stand_in, occurrence.obfuscated) {
                (Some(stand_in), true) => {
                    metadata.push(disclosure(stand_in, name));
                    stand_in.clone()
                }
                _ => name.to_string(),
            }
        }
    };
    Ok(Token::wildcard(text, &group.keycode, metadata))
}

/// The text an occurrence renders, for substitution into metadata.
fn display(index: usize, occurrences: &[Occurrence], groups: &Groups, store: &EntityStore) -> Result<String> {
    let occurrence = &occurrences[index];
    let group = groups.group_of(index);
    Ok(match &group.binding {
        None => format!("{{{}}}", group.keycode),
        Some(Binding::Void) => String::new(),
        Some(Binding::Pronoun(form)) => (*form).to_string(),
        Some(Binding::Entity(key)) => match (&group.stand_in, occurrence.obfuscated) {
            (Some(stand_in), true) => stand_in.clone(),
            _ => store.entity(*key)?.name().to_string(),
        },
    })
}
