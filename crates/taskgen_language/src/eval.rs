//! Evaluation of parsed clauses against entities.

use std::cmp::Ordering;
use std::fmt;

use taskgen_foundation::{Entity, Result, Value};

use crate::ast::{Comparator, Condition, Expr, Literal};
use crate::parser::parse;

/// A parsed where-clause, ready to filter candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    source: String,
    expr: Expr,
}

impl Constraint {
    /// Parses clause text.
    ///
    /// # Errors
    /// Returns an error if the clause is malformed.
    pub fn parse(source: &str) -> Result<Self> {
        let expr = parse(source)?;
        Ok(Self {
            source: source.trim().to_string(),
            expr,
        })
    }

    /// Returns the clause text as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns true if `entity` satisfies the clause.
    pub fn matches<E: Entity + ?Sized>(&self, entity: &E) -> bool {
        evaluate(&self.expr, entity)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// Evaluates an expression against one entity.
pub fn evaluate<E: Entity + ?Sized>(expr: &Expr, entity: &E) -> bool {
    match expr {
        Expr::Compare(condition) => compare(condition, entity),
        Expr::Not(inner) => !evaluate(inner, entity),
        Expr::Binary { op, lhs, rhs } => op.apply(evaluate(lhs, entity), evaluate(rhs, entity)),
    }
}

/// Evaluates one comparison. The literal's kind decides how the property is read.
fn compare<E: Entity + ?Sized>(condition: &Condition, entity: &E) -> bool {
    let property = entity.property(&condition.property);
    let comparator = condition.comparator;

    match &condition.literal {
        Literal::Null => {
            let is_null = property.as_ref().is_none_or(Value::is_null);
            match comparator {
                Comparator::Eq => is_null,
                Comparator::Ne => !is_null,
                _ => false,
            }
        }
        Literal::Bool(expected) => {
            let Some(actual) = property.as_ref().and_then(Value::as_bool) else {
                return false;
            };
            equality(comparator, actual == *expected)
        }
        Literal::String(expected) => {
            let Some(actual) = property.filter(|v| !v.is_null()) else {
                return false;
            };
            equality(comparator, actual.text_eq(expected))
        }
        Literal::Number(expected) => {
            let Some(actual) = property.as_ref().and_then(Value::as_number) else {
                return false;
            };
            let Some(ordering) = actual.partial_cmp(expected) else {
                return false;
            };
            match comparator {
                Comparator::Eq => ordering == Ordering::Equal,
                Comparator::Ne => ordering != Ordering::Equal,
                Comparator::Gt => ordering == Ordering::Greater,
                Comparator::Ge => ordering != Ordering::Less,
                Comparator::Lt => ordering == Ordering::Less,
                Comparator::Le => ordering != Ordering::Greater,
            }
        }
    }
}

fn equality(comparator: Comparator, equal: bool) -> bool {
    match comparator {
        Comparator::Eq => equal,
        Comparator::Ne => !equal,
        _ => false,
    }
}
