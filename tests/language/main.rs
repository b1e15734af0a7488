//! Integration tests for Layer 2: Constraint language
//!
//! Tests where-clause parsing and evaluation against store entities.

mod clauses;
mod errors;
