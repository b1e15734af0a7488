//! Binding identity groups to entities.
//!
//! Resolution runs in three steps:
//! 1. Groups whose where-clause names no other marker are bound directly.
//! 2. Dependent groups are retried in passes; once every marker a clause
//!    names is bound, the names are substituted and the group is bound. A
//!    pass that binds nothing ends the loop, leaving the rest unresolved.
//! 3. Pronouns look back for the nearest preceding antecedent.

use std::collections::{HashMap, VecDeque};

use rand::Rng;
use tracing::{debug, trace, warn};

use taskgen_foundation::{Domain, Entity, Error, Gender, Result};
use taskgen_language::Constraint;
use taskgen_storage::EntityStore;

use crate::group::{Binding, Groups};
use crate::obfuscate::stand_in;
use crate::pool::Pools;
use crate::select::{PronounCase, selection_keyword};
use crate::wildcard::{Occurrence, Template};

/// Default bound on dependent resolution passes.
pub const DEFAULT_MAX_PASSES: usize = 64;

/// Resolves the groups of one attempt against one set of pools.
pub struct Resolver<'a, R: Rng + ?Sized> {
    store: &'a EntityStore,
    pools: Pools,
    rng: &'a mut R,
    max_passes: usize,
}

impl<'a, R: Rng + ?Sized> Resolver<'a, R> {
    /// Creates a resolver with freshly shuffled pools.
    pub fn new(store: &'a EntityStore, rng: &'a mut R) -> Self {
        let pools = Pools::new(store, rng);
        Self {
            store,
            pools,
            rng,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Sets the bound on dependent resolution passes.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Returns the pools as they stand.
    #[must_use]
    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// Binds every group it can and returns the keycodes left unresolved.
    ///
    /// # Errors
    /// Returns an error if a subtype is invalid, a clause does not parse, or
    /// a pool has no candidate satisfying a group's filters.
    pub fn resolve(&mut self, occurrences: &[Occurrence], groups: &mut Groups) -> Result<Vec<String>> {
        let mut pending = VecDeque::new();

        for index in 0..groups.len() {
            let group = groups.get(index);
            match group.domain {
                Domain::Void => {
                    if let Some(subtype) = &group.subtype {
                        return Err(Error::unknown_subtype(Domain::Void.keyword(), subtype));
                    }
                    groups.get_mut(index).binding = Some(Binding::Void);
                }
                Domain::Pronoun => {}
                _ if group.is_dependent() => pending.push_back(index),
                _ => {
                    let clause = group.clause.as_ref().map(|t| t.render(|_, _| String::new()));
                    self.bind(groups, index, clause)?;
                }
            }
        }

        let mut passes = 0;
        while !pending.is_empty() && passes < self.max_passes {
            passes += 1;
            let mut progress = false;
            for _ in 0..pending.len() {
                let Some(index) = pending.pop_front() else {
                    break;
                };
                match self.substituted_clause(groups, index)? {
                    Some(clause) => {
                        self.bind(groups, index, Some(clause))?;
                        progress = true;
                    }
                    None => pending.push_back(index),
                }
            }
            if !progress {
                break;
            }
        }

        for index in 0..groups.len() {
            if groups.get(index).domain == Domain::Pronoun {
                self.bind_pronoun(occurrences, groups, index)?;
            }
        }

        let unresolved: Vec<String> = pending
            .into_iter()
            .map(|index| groups.get(index).keycode.clone())
            .collect();
        if !unresolved.is_empty() {
            warn!(groups = ?unresolved, passes, "wildcards left unresolved");
        }
        Ok(unresolved)
    }

    /// Draws an entity for a pooled group.
    fn bind(&mut self, groups: &mut Groups, index: usize, clause: Option<String>) -> Result<()> {
        let group = groups.get(index);
        let keyword = selection_keyword(group.domain, group.subtype.as_deref(), &mut *self.rng)?;
        let constraint = clause.as_deref().map(Constraint::parse).transpose()?;

        let Some(key) = self
            .pools
            .draw(self.store, group.domain, keyword, constraint.as_ref())?
        else {
            let filter = describe_filter(keyword, clause.as_deref());
            debug!(keycode = %group.keycode, filter = ?filter, "pool exhausted");
            return Err(Error::pool_exhausted(group.keycode.clone(), filter));
        };
        trace!(keycode = %group.keycode, entity = %key, "bound");

        let stand_in = stand_in(self.store, key)?;
        let group = groups.get_mut(index);
        group.keyword = keyword;
        group.stand_in = Some(stand_in);
        group.binding = Some(Binding::Entity(key));
        Ok(())
    }

    /// Renders a dependent group's clause, or `None` if a marker it names is
    /// still unbound.
    fn substituted_clause(&self, groups: &Groups, index: usize) -> Result<Option<String>> {
        let Some(template) = &groups.get(index).clause else {
            return Ok(None);
        };
        if !template.refs().all(|r| groups.group_of(r).is_resolved()) {
            return Ok(None);
        }

        let mut values = HashMap::new();
        for reference in template.refs() {
            values.insert(reference, self.value_of(groups, reference)?);
        }
        Ok(Some(render_quoted(template, &values)))
    }

    /// Returns the concrete text a bound occurrence stands for.
    fn value_of(&self, groups: &Groups, occurrence: usize) -> Result<String> {
        Ok(match &groups.group_of(occurrence).binding {
            Some(Binding::Entity(key)) => self.store.entity(*key)?.name().to_string(),
            Some(Binding::Pronoun(form)) => (*form).to_string(),
            Some(Binding::Void) | None => String::new(),
        })
    }

    /// Binds a pronoun group to the form its antecedent calls for.
    ///
    /// A group shared by several `{pron N}` markers renders one form
    /// everywhere, so the antecedent is the one before its first marker.
    fn bind_pronoun(&self, occurrences: &[Occurrence], groups: &mut Groups, index: usize) -> Result<()> {
        let group = groups.get(index);
        let case = PronounCase::from_subtype(group.subtype.as_deref())?;
        let gender = self.antecedent_gender(occurrences, groups, group.members[0])?;
        groups.get_mut(index).binding = Some(Binding::Pronoun(case.form(gender)));
        Ok(())
    }

    /// Finds the gender of the nearest person bound by a top-level wildcard
    /// before `occurrence`. Neutral when no person precedes it.
    fn antecedent_gender(&self, occurrences: &[Occurrence], groups: &Groups, occurrence: usize) -> Result<Gender> {
        for candidate in (0..occurrence).rev() {
            if occurrences[candidate].is_nested() {
                continue;
            }
            let Some(Binding::Entity(key)) = groups.group_of(candidate).binding else {
                continue;
            };
            if let Some(gender) = self.store.entity(key)?.gender() {
                return Ok(gender);
            }
        }
        Ok(Gender::Neutral)
    }
}

/// Substitutes values into a clause, quoting each one unless the author
/// already did.
fn render_quoted(template: &Template, values: &HashMap<usize, String>) -> String {
    template.render(|reference, before| {
        let value = values.get(&reference).map_or("", String::as_str);
        match before.chars().last() {
            Some(quote @ ('"' | '\'')) => escape(value, quote),
            _ => format!("\"{}\"", escape(value, '"')),
        }
    })
}

fn escape(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn describe_filter(keyword: Option<&str>, clause: Option<&str>) -> Option<String> {
    match (keyword, clause) {
        (None, None) => None,
        (Some(keyword), None) => Some(keyword.to_string()),
        (None, Some(clause)) => Some(format!("where {clause}")),
        (Some(keyword), Some(clause)) => Some(format!("{keyword} where {clause}")),
    }
}
