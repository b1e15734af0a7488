//! Sentence generation.
//!
//! Generation starts at `$Main`, picks one alternative uniformly, and replaces
//! every `$Name` or `${Name}` reference in it with a recursively generated
//! expansion of that rule. Undefined rules expand to nothing. The result is
//! literal text still carrying `{...}` wildcard markers.

use rand::Rng;

use taskgen_foundation::{Error, Result};

use crate::expand::is_name_char;
use crate::grammar::Grammar;

/// Default bound on nested rule expansions.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Expands a grammar into sentences.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'g> {
    grammar: &'g Grammar,
    max_depth: usize,
}

impl<'g> Generator<'g> {
    /// Creates a generator with the default depth bound.
    #[must_use]
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Generates one sentence from the start rule.
    ///
    /// # Errors
    /// Returns a `RecursionLimit` error if expansion nests deeper than the
    /// depth bound.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        self.expand_rule(Grammar::START, rng, 0)
    }

    /// Expands every reference in `text`.
    ///
    /// # Errors
    /// Returns a `RecursionLimit` error if expansion nests deeper than the
    /// depth bound.
    pub fn expand<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String> {
        self.expand_text(text, rng, 0)
    }

    fn expand_rule<R: Rng + ?Sized>(&self, name: &str, rng: &mut R, depth: usize) -> Result<String> {
        if depth >= self.max_depth {
            return Err(Error::recursion_limit(self.max_depth));
        }
        let Some(alternatives) = self.grammar.rule(name) else {
            return Ok(String::new());
        };
        let choice = &alternatives[rng.gen_range(0..alternatives.len())];
        self.expand_text(choice, rng, depth + 1)
    }

    fn expand_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R, depth: usize) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(dollar) = rest.find('$') {
            out.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];
            match reference_at(after) {
                Some((name, consumed)) => {
                    out.push_str(&self.expand_rule(name, rng, depth)?);
                    rest = &after[consumed..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Reads a reference name directly after a `$`, returning it and the number
/// of bytes it spans.
fn reference_at(text: &str) -> Option<(&str, usize)> {
    if let Some(braced) = text.strip_prefix('{') {
        let len = braced.find(|c: char| !is_name_char(c))?;
        return (len > 0 && braced[len..].starts_with('}')).then(|| (&braced[..len], len + 2));
    }
    let len = text
        .find(|c: char| !is_name_char(c))
        .unwrap_or(text.len());
    (len > 0).then(|| (&text[..len], len))
}
