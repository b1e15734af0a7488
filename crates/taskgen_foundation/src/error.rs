//! Error types for the taskgen system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::tier::Tier;

/// Result type used throughout taskgen.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for taskgen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes an import frame onto this error's context, creating one if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a grammar parse error.
    #[must_use]
    pub fn grammar_parse(message: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::GrammarParse {
            message: message.into(),
            line,
        })
    }

    /// Creates a missing start rule error.
    #[must_use]
    pub fn missing_start_rule(grammar: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingStartRule(grammar.into()))
    }

    /// Creates an unsupported directive error.
    #[must_use]
    pub fn unsupported_directive(directive: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedDirective(directive.into()))
    }

    /// Creates an import cycle error.
    #[must_use]
    pub fn import_cycle(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ImportCycle(path.into()))
    }

    /// Creates an I/O error for a grammar source.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Creates a constraint parse error.
    #[must_use]
    pub fn constraint_parse(message: impl Into<String>, column: usize) -> Self {
        Self::new(ErrorKind::ConstraintParse {
            message: message.into(),
            column,
        })
    }

    /// Creates a recursion limit error.
    #[must_use]
    pub fn recursion_limit(limit: usize) -> Self {
        Self::new(ErrorKind::RecursionLimit(limit))
    }

    /// Creates a pool exhaustion error.
    #[must_use]
    pub fn pool_exhausted(keycode: impl Into<String>, filter: Option<String>) -> Self {
        Self::new(ErrorKind::PoolExhausted {
            keycode: keycode.into(),
            filter,
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound(what.into()))
    }

    /// Creates an unknown wildcard error.
    #[must_use]
    pub fn unknown_wildcard(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownWildcard(name.into()))
    }

    /// Creates an unknown subtype error.
    #[must_use]
    pub fn unknown_subtype(name: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSubtype {
            name: name.into(),
            subtype: subtype.into(),
        })
    }

    /// Creates an error for a generator that has handed out every id.
    #[must_use]
    pub fn ids_exhausted() -> Self {
        Self::new(ErrorKind::IdsExhausted)
    }

    /// Returns true if a fresh attempt (new grammar choice, new pools) may succeed
    /// where this one failed.
    #[must_use]
    pub fn is_attempt_local(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::RecursionLimit(_)
                | ErrorKind::PoolExhausted { .. }
                | ErrorKind::UnknownWildcard(_)
                | ErrorKind::UnknownSubtype { .. }
                | ErrorKind::ConstraintParse { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Grammar text could not be parsed.
    #[error("grammar parse error on line {line}: {message}")]
    GrammarParse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// Grammar has no `$Main` rule after normalization.
    #[error("grammar {0} has no start rule")]
    MissingStartRule(String),

    /// A recognized directive that is not supported.
    #[error("unsupported directive: {0}")]
    UnsupportedDirective(String),

    /// A grammar imports itself, directly or transitively.
    #[error("import cycle through {0}")]
    ImportCycle(String),

    /// A grammar source could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// Path of the source that failed.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// A where-clause could not be parsed.
    #[error("constraint parse error at column {column}: {message}")]
    ConstraintParse {
        /// Description of the parse error.
        message: String,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Sentence generation nested deeper than the configured limit.
    #[error("grammar is recursive: depth limit ({0}) exceeded")]
    RecursionLimit(usize),

    /// No pool entry satisfied the active filters.
    #[error("no candidate left for {keycode}{}", describe_filter(.filter))]
    PoolExhausted {
        /// The identity group being resolved.
        keycode: String,
        /// The filter that could not be satisfied.
        filter: Option<String>,
    },

    /// An entity id does not belong to the store it was used with.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Wildcard name is not a known domain.
    #[error("unknown wildcard: {0}")]
    UnknownWildcard(String),

    /// Wildcard subtype is not valid for its domain.
    #[error("unknown subtype {subtype} for wildcard {name}")]
    UnknownSubtype {
        /// The wildcard name.
        name: String,
        /// The rejected subtype.
        subtype: String,
    },

    /// The automatic id counter has no ids left.
    #[error("wildcard ids exhausted")]
    IdsExhausted,

    /// No loaded grammar is at or below the requested tier.
    #[error("no grammar available at tier {0}")]
    NoEligibleGrammar(Tier),

    /// All attempts failed.
    #[error("no task generated after {attempts} attempts: {last}")]
    NoTaskGenerated {
        /// Number of attempts made.
        attempts: u32,
        /// The error that ended the final attempt.
        last: Box<Error>,
    },
}

fn describe_filter(filter: &Option<String>) -> String {
    filter
        .as_ref()
        .map(|f| format!(" matching {f}"))
        .unwrap_or_default()
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Grammar source path or name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Import chain, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  imported from {frame}")?;
            }
        }
        Ok(())
    }
}
