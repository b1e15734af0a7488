//! taskgen - Randomized task sentences from wildcard grammars
//!
//! This crate re-exports all layers of the taskgen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: taskgen_runtime    - REPL, CLI, filesystem grammar loading
//! Layer 4: taskgen_stdlib     - Built-in household data and sample grammars
//! Layer 3: taskgen_engine     - Wildcard scanning, resolution, task assembly
//! Layer 2: taskgen_grammar    - Grammar normalization and sentence generation
//!          taskgen_language   - Where-clause lexer, parser, evaluator
//! Layer 1: taskgen_storage    - Household entity store
//! Layer 0: taskgen_foundation - Core types (Value, Domain, Tier, Error)
//! ```

pub use taskgen_engine as engine;
pub use taskgen_foundation as foundation;
pub use taskgen_grammar as grammar;
pub use taskgen_language as language;
pub use taskgen_runtime as runtime;
pub use taskgen_stdlib as stdlib;
pub use taskgen_storage as storage;
