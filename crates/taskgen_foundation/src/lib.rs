//! Core types, values, and errors for taskgen.
//!
//! This crate provides:
//! - [`Value`] - Tagged property values used by where-clauses
//! - [`Entity`] - The capability surface every resolvable entity exposes
//! - [`Domain`] - Wildcard domains (object, location, name, ...)
//! - [`Tier`] - Grammar difficulty tiers
//! - [`Span`] - Source locations for grammar text and wildcard markers
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod span;
pub mod tier;
pub mod value;

pub use entity::{Domain, Entity, Gender};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use span::Span;
pub use tier::Tier;
pub use value::Value;
