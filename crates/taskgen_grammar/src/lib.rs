//! Grammar normalization and sentence generation for taskgen.
//!
//! This crate provides:
//! - [`Grammar`] - A named, tiered set of production rules with a `$Main` start rule
//! - [`GrammarLoader`] - Where grammar text comes from ([`MemoryLoader`] for embedded sets)
//! - [`RuleSet`] - Raw production rules as written, before group expansion
//! - [`Generator`] - Expands a grammar's start rule into a sentence
//!
//! Grammar text is a list of `$NonTerminal = alt | alt | ...` lines. Parentheses
//! group alternatives inline and are expanded into synthetic `parent_N` rules
//! when the grammar is built:
//!
//! ```text
//! // grammar name Fetch
//! // grammar tier Easy
//! // import common.txt
//! $Main = (bring | fetch) me the {object}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod expand;
pub mod generator;
pub mod grammar;
pub mod loader;
pub mod rules;
pub mod source;

pub use generator::{DEFAULT_MAX_DEPTH, Generator};
pub use grammar::Grammar;
pub use loader::{GrammarLoader, MemoryLoader};
pub use rules::RuleSet;
pub use source::{Directive, SourceFile};
