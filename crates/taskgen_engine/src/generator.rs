//! The task generation driver.
//!
//! One attempt chooses a grammar, expands a sentence, scans its wildcards,
//! resolves them against fresh pools and assembles the tokens. Failures a
//! fresh attempt may cure are retried up to the configured bound.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use taskgen_foundation::{Error, ErrorKind, Result, Tier};
use taskgen_grammar::{Generator, Grammar};
use taskgen_storage::EntityStore;

use crate::config::GeneratorConfig;
use crate::group::unify;
use crate::ids::IdCounter;
use crate::resolver::Resolver;
use crate::task::{Task, assemble};
use crate::wildcard::scan;

/// Generates tasks from a set of grammars and an entity store.
pub struct TaskGenerator {
    grammars: Vec<Grammar>,
    store: EntityStore,
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    ids: IdCounter,
}

impl TaskGenerator {
    /// Creates a generator seeded from `config`.
    #[must_use]
    pub fn new(grammars: Vec<Grammar>, store: EntityStore, config: GeneratorConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            grammars,
            store,
            config,
            rng,
            ids: IdCounter::new(),
        }
    }

    /// Generates a task from a grammar at or below the configured tier.
    ///
    /// # Errors
    /// See [`generate_at`](Self::generate_at).
    pub fn generate(&mut self) -> Result<Task> {
        self.generate_at(self.config.tier)
    }

    /// Generates a task from a grammar at or below `ceiling`.
    ///
    /// # Errors
    /// Returns `NoEligibleGrammar` if no grammar is at or below `ceiling`,
    /// `NoTaskGenerated` if every attempt failed with a retryable error, or
    /// the first error no retry could cure.
    pub fn generate_at(&mut self, ceiling: Tier) -> Result<Task> {
        let eligible: Vec<usize> = self
            .grammars
            .iter()
            .enumerate()
            .filter(|(_, g)| g.tier() <= ceiling)
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return Err(Error::new(ErrorKind::NoEligibleGrammar(ceiling)));
        }

        let attempts = self.config.max_attempts.max(1);
        let mut last = None;
        for attempt in 1..=attempts {
            let Some(&index) = eligible.choose(&mut self.rng) else {
                break;
            };
            debug!(attempt, grammar = %self.grammars[index].name(), "attempt started");
            match self.attempt(index) {
                Ok(task) => return Ok(task),
                Err(err) if err.is_attempt_local() => {
                    debug!(attempt, error = %err, "attempt failed");
                    last = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let last = last.unwrap_or_else(|| Error::new(ErrorKind::NoEligibleGrammar(ceiling)));
        Err(Error::new(ErrorKind::NoTaskGenerated {
            attempts,
            last: Box::new(last),
        }))
    }

    fn attempt(&mut self, index: usize) -> Result<Task> {
        let grammar = &self.grammars[index];
        let sentence = Generator::new(grammar)
            .with_max_depth(self.config.max_depth)
            .generate(&mut self.rng)?;
        trace!(sentence = %sentence, "generated");

        let occurrences = scan(&sentence, &mut self.ids)?;
        let mut groups = unify(&occurrences)?;
        let unresolved = Resolver::new(&self.store, &mut self.rng)
            .with_max_passes(self.config.max_resolution_passes)
            .resolve(&occurrences, &mut groups)?;

        assemble(
            grammar.name(),
            grammar.tier(),
            &sentence,
            &occurrences,
            &groups,
            unresolved,
            &self.store,
        )
    }

    /// Restarts the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the loaded grammars.
    #[must_use]
    pub fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    /// Returns the entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}
