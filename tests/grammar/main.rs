//! Integration tests for the taskgen_grammar crate.
//!
//! - Loading and normalizing grammar files through a loader
//! - The language a normalized grammar generates

mod language;
mod loading;
