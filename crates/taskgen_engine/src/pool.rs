//! Candidate pools.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use taskgen_foundation::{Domain, Entity, Result};
use taskgen_language::Constraint;
use taskgen_storage::{EntityKey, EntityStore};

/// One shuffled, consumable candidate list per pooled domain.
///
/// An entity leaves its pool the moment it is drawn, so no two groups in one
/// attempt can be bound to the same entity.
#[derive(Clone, Debug)]
pub struct Pools {
    pools: BTreeMap<Domain, Vec<EntityKey>>,
}

impl Pools {
    /// Fills and shuffles a pool for every pooled domain in `store`.
    pub fn new<R: Rng + ?Sized>(store: &EntityStore, rng: &mut R) -> Self {
        let pools = Domain::POOLED
            .into_iter()
            .map(|domain| {
                let mut keys = store.keys(domain);
                keys.shuffle(rng);
                (domain, keys)
            })
            .collect();
        Self { pools }
    }

    /// Returns how many candidates remain in a domain.
    #[must_use]
    pub fn remaining(&self, domain: Domain) -> usize {
        self.pools.get(&domain).map_or(0, Vec::len)
    }

    /// Draws a candidate, or `None` if nothing left satisfies the filters.
    ///
    /// Without filters the last candidate is popped. With filters the first
    /// matching candidate is removed and the rest keep their order.
    ///
    /// # Errors
    /// Returns an error if a pooled key is not in `store`.
    pub fn draw(
        &mut self,
        store: &EntityStore,
        domain: Domain,
        keyword: Option<&str>,
        constraint: Option<&Constraint>,
    ) -> Result<Option<EntityKey>> {
        let Some(pool) = self.pools.get_mut(&domain) else {
            return Ok(None);
        };
        if keyword.is_none() && constraint.is_none() {
            return Ok(pool.pop());
        }

        let mut found = None;
        for (index, &key) in pool.iter().enumerate() {
            let view = store.entity(key)?;
            let keyword_ok = keyword.is_none_or(|k| view.matches_keyword(k));
            if keyword_ok && constraint.is_none_or(|c| c.matches(&view)) {
                found = Some(index);
                break;
            }
        }
        Ok(found.map(|index| pool.remove(index)))
    }
}
