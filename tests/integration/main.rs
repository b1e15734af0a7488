//! End-to-end tests over the built-in household and sample grammars.
//!
//! - Determinism of whole runs
//! - Tier ceilings and task quality
//! - The REPL driven by scripted input

mod pipeline;
mod repl;

use taskgen_engine::{GeneratorConfig, TaskGenerator};
use taskgen_foundation::Tier;

pub fn stdlib_generator(seed: u64, tier: Tier) -> TaskGenerator {
    TaskGenerator::new(
        taskgen_stdlib::grammars().unwrap(),
        taskgen_stdlib::household().unwrap(),
        GeneratorConfig::new().with_seed(seed).with_tier(tier),
    )
}
