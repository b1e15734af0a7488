//! Production rule sets.

use std::collections::BTreeMap;

/// A mapping from non-terminal names (without the `$`) to their alternatives.
///
/// Keys iterate in sorted order so that building the same text twice yields
/// identical synthetic names. Rules never hold zero alternatives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeMap<String, Vec<String>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds alternatives to a rule, creating it if needed.
    ///
    /// Alternatives already present are skipped. Adding an empty list is a
    /// no-op, so a rule with no alternatives is never stored.
    pub fn add(&mut self, name: &str, alternatives: impl IntoIterator<Item = String>) {
        let mut alternatives = alternatives.into_iter().peekable();
        if alternatives.peek().is_none() {
            return;
        }
        let existing = self.rules.entry(name.to_string()).or_default();
        for alt in alternatives {
            if !existing.contains(&alt) {
                existing.push(alt);
            }
        }
    }

    /// Replaces a rule's alternatives outright.
    pub(crate) fn replace(&mut self, name: &str, alternatives: Vec<String>) {
        if alternatives.is_empty() {
            self.rules.remove(name);
        } else {
            self.rules.insert(name.to_string(), alternatives);
        }
    }

    /// Merges every rule of `other` into this set, skipping `except` if given.
    pub fn merge(&mut self, other: &RuleSet, except: Option<&str>) {
        for (name, alternatives) in &other.rules {
            if Some(name.as_str()) == except {
                continue;
            }
            self.add(name, alternatives.iter().cloned());
        }
    }

    /// Returns the alternatives of a rule.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.rules.get(name).map(Vec::as_slice)
    }

    /// Returns true if a rule with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns rule names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterates over `(name, alternatives)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(name, alts)| (name.as_str(), alts.as_slice()))
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
