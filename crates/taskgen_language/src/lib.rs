//! Lexer, parser, and evaluator for taskgen where-clauses.
//!
//! A where-clause filters the candidates a wildcard may resolve to:
//!
//! ```text
//! {object where category="drinks" and not type="special"}
//! ```
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of clause text
//! - [`Parser`] - Left-to-right parsing into an [`Expr`] tree
//! - [`Constraint`] - A parsed clause that can be tested against any [`taskgen_foundation::Entity`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{BoolOp, Comparator, Condition, Expr, Literal};
pub use eval::Constraint;
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use token::{Token, TokenKind};
