//! Generator configuration.

use taskgen_foundation::Tier;
use taskgen_grammar::DEFAULT_MAX_DEPTH;

/// Settings for a [`TaskGenerator`](crate::TaskGenerator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the generator's random source.
    pub seed: u64,
    /// Highest tier a grammar may have to be chosen.
    pub tier: Tier,
    /// Attempts per task before giving up.
    pub max_attempts: u32,
    /// Bound on nested rule expansions.
    pub max_depth: usize,
    /// Bound on dependent resolution passes per attempt.
    pub max_resolution_passes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tier: Tier::Expert,
            max_attempts: 3,
            max_depth: DEFAULT_MAX_DEPTH,
            max_resolution_passes: 64,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the tier ceiling.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the number of attempts per task. At least one attempt is made.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Sets the expansion depth bound.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the dependent resolution pass bound.
    #[must_use]
    pub fn with_max_resolution_passes(mut self, passes: usize) -> Self {
        self.max_resolution_passes = passes;
        self
    }
}
