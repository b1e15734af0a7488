//! Wildcard resolution and task assembly for taskgen.
//!
//! This crate provides:
//! - [`scan`] - Extracts `{...}` wildcard markers from generated text
//! - [`IdCounter`] - Run-owned source of automatic wildcard ids
//! - [`IdentityGroup`] - Occurrences sharing a keycode, bound to one entity
//! - [`Pools`] - Shuffled, consumable candidate lists per domain
//! - [`Resolver`] - Binds every group, in dependency order
//! - [`Task`] - The assembled token list
//! - [`TaskGenerator`] - Grammar choice, generation, resolution and retries
//!
//! A wildcard marker has the form
//! `{name[?][ subtype][ id][ where <clause>][ meta: <text>]}`. Markers that share
//! a name and id (their keycode, e.g. `object0001`) always render the same entity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod generator;
pub mod group;
pub mod ids;
pub mod obfuscate;
pub mod pool;
pub mod resolver;
pub mod select;
pub mod task;
pub mod wildcard;

pub use config::GeneratorConfig;
pub use generator::TaskGenerator;
pub use group::{Binding, Groups, IdentityGroup, unify};
pub use ids::IdCounter;
pub use obfuscate::{disclosure, stand_in};
pub use pool::Pools;
pub use resolver::Resolver;
pub use select::{PronounCase, selection_keyword};
pub use task::{Task, Token, assemble};
pub use wildcard::{Occurrence, Piece, Template, scan};
