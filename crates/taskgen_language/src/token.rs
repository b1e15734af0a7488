//! Token types for where-clauses.
//!
//! Tokens are the output of the lexer and input to the parser.

use taskgen_foundation::Span;

use crate::ast::Comparator;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the 1-based column where this token starts.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.span.start + 1
    }
}

/// Token types for where-clauses.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Property name like `category` or `is_heavy`
    Ident(String),
    /// One of `=`, `!=`, `>`, `>=`, `<`, `<=`
    Compare(Comparator),

    // Literals
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// Number literal like `3`, `-2.5`
    Number(f64),
    /// Quoted string literal, with `\"`, `\'` and `\\` unescaped
    String(String),

    // Boolean operators
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `not`
    Not,

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::True | Self::False | Self::Number(_) | Self::String(_)
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::Compare(_) => "comparator",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
            Self::Eof => "end of clause",
            Self::Error(_) => "error",
        }
    }
}
