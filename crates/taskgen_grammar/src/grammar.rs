//! Built grammars.

use tracing::{debug, trace};

use taskgen_foundation::{Error, Result, Tier};

use crate::expand::expand_groups;
use crate::loader::{GrammarLoader, MemoryLoader};
use crate::rules::RuleSet;
use crate::source::{Directive, SourceFile};

/// A normalized grammar: imports merged, groups expanded, `$Main` present.
#[derive(Clone, Debug)]
pub struct Grammar {
    name: String,
    tier: Tier,
    rules: RuleSet,
}

impl Grammar {
    /// Name of the start rule.
    pub const START: &'static str = "Main";

    /// Loads, merges and normalizes the grammar at `path`.
    ///
    /// # Errors
    /// Returns an error if any file in the import graph cannot be read or
    /// parsed, if imports form a cycle, or if no `$Main` rule remains.
    pub fn load<L: GrammarLoader + ?Sized>(path: &str, loader: &L) -> Result<Self> {
        let mut stack = Vec::new();
        let (source, raw) = collect(path, loader, &mut stack)?;
        let name = source.name.unwrap_or_else(|| path.to_string());
        Self::from_rules(name, source.tier.unwrap_or_default(), raw)
    }

    /// Builds a grammar from standalone text. Load and import directives
    /// fail, since there is nothing to load them from.
    ///
    /// # Errors
    /// Returns an error if the text is malformed or has no `$Main` rule.
    pub fn parse(name: &str, text: &str) -> Result<Self> {
        Self::load(name, &MemoryLoader::new().with_file(name, text))
    }

    /// Normalizes raw rules into a grammar.
    ///
    /// # Errors
    /// Returns a `MissingStartRule` error if there is no `$Main` rule.
    pub fn from_rules(name: impl Into<String>, tier: Tier, mut rules: RuleSet) -> Result<Self> {
        let name = name.into();
        let synthetic = expand_groups(&mut rules);
        if !rules.contains(Self::START) {
            return Err(Error::missing_start_rule(name));
        }
        debug!(
            grammar = %name,
            tier = %tier,
            rules = rules.len(),
            synthetic,
            "grammar built"
        );
        Ok(Self { name, tier, rules })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the difficulty tier.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Returns the alternatives of a rule.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&[String]> {
        self.rules.get(name)
    }

    /// Returns every rule.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// Reads `path` and everything it loads or imports, returning the file and
/// the union of raw rules.
fn collect<L: GrammarLoader + ?Sized>(
    path: &str,
    loader: &L,
    stack: &mut Vec<String>,
) -> Result<(SourceFile, RuleSet)> {
    if stack.iter().any(|p| p == path) {
        return Err(Error::import_cycle(path));
    }

    let text = loader.read(path)?;
    let source = SourceFile::parse(&text).map_err(|e| located(e, path))?;
    let mut rules = source.rules.clone();

    stack.push(path.to_string());
    for directive in &source.directives {
        let target = loader.resolve(path, directive.path());
        let except = match directive {
            Directive::Load(_) => None,
            Directive::Import(_) => Some(Grammar::START),
        };
        let (_, imported) = collect(&target, loader, stack).map_err(|e| e.in_frame(path))?;
        trace!(
            grammar = %path,
            import = %target,
            rules = imported.len(),
            "merged rules"
        );
        rules.merge(&imported, except);
    }
    stack.pop();

    Ok((source, rules))
}

/// Records the file an error came from unless it already names one.
fn located(mut err: Error, path: &str) -> Error {
    let mut context = err.context.take().unwrap_or_default();
    if context.source.is_none() {
        context.source = Some(path.to_string());
    }
    err.with_context(context)
}
