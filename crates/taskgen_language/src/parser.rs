//! Parser for where-clauses.
//!
//! ```text
//! clause    := term (boolop term)*
//! term      := "not"? condition
//! condition := identifier comparator literal
//! ```
//!
//! There is no precedence and no grouping; connectives fold left.

use taskgen_foundation::{Error, Result};

use crate::ast::{BoolOp, Comparator, Condition, Expr, Literal};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parser for where-clause text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parses a complete clause. Trailing tokens are an error.
    ///
    /// # Errors
    /// Returns an error if the source is not a well-formed clause.
    pub fn parse_clause(&mut self) -> Result<Expr> {
        let mut expr = self.parse_term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::And => BoolOp::And,
                TokenKind::Or => BoolOp::Or,
                TokenKind::Xor => BoolOp::Xor,
                TokenKind::Eof => break,
                _ => {
                    return Err(self.error(&format!(
                        "expected and, or, xor or end of clause, found {}",
                        self.current.kind.name()
                    )));
                }
            };
            self.advance();
            let rhs = self.parse_term()?;
            expr = Expr::Binary {
                op,
                lhs: Box::new(expr),
                rhs: Box::new(rhs),
            };
        }

        Ok(expr)
    }

    /// Parses `not? condition`.
    fn parse_term(&mut self) -> Result<Expr> {
        if self.current.kind == TokenKind::Not {
            self.advance();
            let condition = self.parse_condition()?;
            return Ok(Expr::Not(Box::new(Expr::Compare(condition))));
        }
        Ok(Expr::Compare(self.parse_condition()?))
    }

    /// Parses `identifier comparator literal`.
    fn parse_condition(&mut self) -> Result<Condition> {
        let property = match &self.current.kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Error(msg) => return Err(self.error(&msg.clone())),
            other => {
                return Err(self.error(&format!("expected property name, found {}", other.name())));
            }
        };
        self.advance();

        let comparator = match &self.current.kind {
            TokenKind::Compare(c) => *c,
            TokenKind::Error(msg) => return Err(self.error(&msg.clone())),
            other => {
                return Err(self.error(&format!("expected comparator, found {}", other.name())));
            }
        };
        self.advance();

        let literal_token = self.current.clone();
        let literal = match literal_token.kind {
            TokenKind::Null => Literal::Null,
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Number(n) => Literal::Number(n),
            TokenKind::String(s) => Literal::String(s),
            TokenKind::Error(msg) => return Err(self.error(&msg)),
            other => {
                return Err(self.error(&format!("expected literal, found {}", other.name())));
            }
        };

        if !comparator.is_equality() && !matches!(literal, Literal::Number(_)) {
            return Err(self.error(&format!(
                "comparator {} needs a number, found {}",
                comparator.symbol(),
                literal.kind_name()
            )));
        }
        self.advance();

        Ok(Condition {
            property,
            comparator,
            literal,
        })
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        Error::constraint_parse(message, self.current.column())
    }
}

/// Parses clause text into an expression tree.
///
/// # Errors
/// Returns an error if the source is not a well-formed clause.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source).parse_clause()
}
