//! Built-in data for taskgen.
//!
//! This crate provides:
//! - [`household`] - A small household arena: rooms, locations, objects,
//!   people, gestures and questions
//! - [`grammars`] - Sample grammars, one per tier, sharing `common.txt`
//! - [`loader`] - The sample grammar files as a [`MemoryLoader`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grammars;
pub mod household;

pub use grammars::{SAMPLE_GRAMMARS, grammars, loader};
pub use household::household;

pub use taskgen_grammar::MemoryLoader;
