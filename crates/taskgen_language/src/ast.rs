//! Syntax tree for where-clauses.

use std::fmt;

/// A comparison operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
}

impl Comparator {
    /// Returns true for `=` and `!=`, the only comparators allowed on
    /// string, boolean and null literals.
    #[must_use]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::Ne)
    }

    /// Returns the operator's source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

/// A boolean connective between two terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoolOp {
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
}

impl BoolOp {
    /// Applies the connective.
    #[must_use]
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::And => lhs && rhs,
            Self::Or => lhs || rhs,
            Self::Xor => lhs ^ rhs,
        }
    }

    /// Returns the operator's source text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

/// A typed literal on the right-hand side of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// A quoted string.
    String(String),
    /// A number.
    Number(f64),
}

impl Literal {
    /// Returns a short name for this literal's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::Number(_) => "number",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")
            }
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// `property comparator literal`
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    /// The property looked up on the entity.
    pub property: String,
    /// The comparison operator.
    pub comparator: Comparator,
    /// The literal compared against.
    pub literal: Literal,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.property,
            self.comparator.symbol(),
            self.literal
        )
    }
}

/// A parsed clause.
///
/// Connectives associate to the left in the order written, so
/// `a or b and c` is `(a or b) and c`.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A single comparison.
    Compare(Condition),
    /// `not <condition>`
    Not(Box<Expr>),
    /// Two sub-expressions joined by a connective.
    Binary {
        /// The connective.
        op: BoolOp,
        /// Everything to the left.
        lhs: Box<Expr>,
        /// The next term.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Returns every condition in source order.
    #[must_use]
    pub fn conditions(&self) -> Vec<&Condition> {
        match self {
            Self::Compare(c) => vec![c],
            Self::Not(inner) => inner.conditions(),
            Self::Binary { lhs, rhs, .. } => {
                let mut all = lhs.conditions();
                all.extend(rhs.conditions());
                all
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(c) => write!(f, "{c}"),
            Self::Not(inner) => write!(f, "not {inner}"),
            Self::Binary { op, lhs, rhs } => write!(f, "{lhs} {} {rhs}", op.keyword()),
        }
    }
}
