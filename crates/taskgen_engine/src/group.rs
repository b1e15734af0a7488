//! Identity groups.
//!
//! Every occurrence sharing a keycode belongs to one group, and the group is
//! bound to a single entity that all of them render.

use std::collections::HashMap;

use taskgen_foundation::{Domain, Error, Result};
use taskgen_storage::EntityKey;

use crate::wildcard::{Occurrence, Template};

/// What a group resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// An entity drawn from a pool.
    Entity(EntityKey),
    /// A pronoun form.
    Pronoun(&'static str),
    /// Nothing; the marker only carries metadata.
    Void,
}

/// Occurrences that must render the same entity.
#[derive(Clone, Debug)]
pub struct IdentityGroup {
    /// The shared keycode.
    pub keycode: String,
    /// The domain the group draws from.
    pub domain: Domain,
    /// The first subtype written by any member.
    pub subtype: Option<String>,
    /// The first where-clause written by any member.
    pub clause: Option<Template>,
    /// Member occurrence indices, in scan order.
    pub members: Vec<usize>,
    /// The selection keyword used to draw the entity.
    pub keyword: Option<&'static str>,
    /// The resolved value, once bound.
    pub binding: Option<Binding>,
    /// The obfuscated companion of the bound entity.
    pub stand_in: Option<String>,
}

impl IdentityGroup {
    /// Returns true once the group is bound.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.binding.is_some()
    }

    /// Returns true if the group's clause names another marker.
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        self.clause.as_ref().is_some_and(Template::has_refs)
    }
}

/// The groups of one sentence, with a lookup from occurrence to group.
#[derive(Clone, Debug, Default)]
pub struct Groups {
    groups: Vec<IdentityGroup>,
    by_occurrence: Vec<usize>,
}

impl Groups {
    /// Returns the groups in order of first appearance.
    #[must_use]
    pub fn as_slice(&self) -> &[IdentityGroup] {
        &self.groups
    }

    /// Returns the index of the group an occurrence belongs to.
    #[must_use]
    pub fn index_of(&self, occurrence: usize) -> usize {
        self.by_occurrence[occurrence]
    }

    /// Returns the group an occurrence belongs to.
    #[must_use]
    pub fn group_of(&self, occurrence: usize) -> &IdentityGroup {
        &self.groups[self.by_occurrence[occurrence]]
    }

    /// Finds a group by keycode.
    #[must_use]
    pub fn by_keycode(&self, keycode: &str) -> Option<&IdentityGroup> {
        self.groups.iter().find(|g| g.keycode == keycode)
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> &IdentityGroup {
        &self.groups[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut IdentityGroup {
        &mut self.groups[index]
    }
}

/// Groups occurrences by keycode.
///
/// # Errors
/// Returns an `UnknownWildcard` error for a marker whose name is not a domain.
pub fn unify(occurrences: &[Occurrence]) -> Result<Groups> {
    let mut groups: Vec<IdentityGroup> = Vec::new();
    let mut by_keycode: HashMap<String, usize> = HashMap::new();
    let mut by_occurrence = Vec::with_capacity(occurrences.len());

    for (index, occurrence) in occurrences.iter().enumerate() {
        let domain = Domain::from_keyword(&occurrence.name)
            .ok_or_else(|| Error::unknown_wildcard(&occurrence.name))?;
        let keycode = occurrence.keycode();

        let group_index = *by_keycode.entry(keycode.clone()).or_insert_with(|| {
            groups.push(IdentityGroup {
                keycode,
                domain,
                subtype: None,
                clause: None,
                members: Vec::new(),
                keyword: None,
                binding: None,
                stand_in: None,
            });
            groups.len() - 1
        });

        let group = &mut groups[group_index];
        group.members.push(index);
        if group.subtype.is_none() {
            group.subtype.clone_from(&occurrence.subtype);
        }
        if group.clause.is_none() {
            group.clause.clone_from(&occurrence.clause);
        }
        by_occurrence.push(group_index);
    }

    Ok(Groups {
        groups,
        by_occurrence,
    })
}
