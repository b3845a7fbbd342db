//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Malformed-input errors carry where the parser gave up: a line and
//!   column for syntax errors, a field path for shape errors.
//! - Validation errors carry the field path of the violated invariant and
//!   a human-readable reason.
//! - Neither kind is retried; both are deterministic in the input.

use std::fmt;

use thiserror::Error;

use crate::path::FieldPath;

/// Where in the input a [`MalformedInputError`] was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The input as a whole (wrong root type, unterminated block, ...).
    Root,
    /// A 1-based line and column in the source text.
    Position {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
    },
    /// A recognized field whose value has the wrong shape.
    Field(FieldPath),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("(root)"),
            Self::Field(path) if path.is_root() => f.write_str("(root)"),
            Self::Position { line, column } => write!(f, "line {line} column {column}"),
            Self::Field(path) => write!(f, "'{path}'"),
        }
    }
}

/// The raw block could not be read as structured text of the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed input at {location}: {reason}")]
pub struct MalformedInputError {
    /// Where the problem was found.
    pub location: Location,
    /// What the parser objected to.
    pub reason: String,
}

impl MalformedInputError {
    /// An error about the input as a whole.
    pub fn at_root(reason: impl Into<String>) -> Self {
        Self {
            location: Location::Root,
            reason: reason.into(),
        }
    }

    /// An error at a 1-based line and column.
    pub fn at_position(line: usize, column: usize, reason: impl Into<String>) -> Self {
        Self {
            location: Location::Position { line, column },
            reason: reason.into(),
        }
    }

    /// An error about the value of a recognized field.
    pub fn at_field(field: FieldPath, reason: impl Into<String>) -> Self {
        Self {
            location: Location::Field(field),
            reason: reason.into(),
        }
    }

    /// Moves a positional location down by `lines`.
    ///
    /// Used when the parsed block starts part-way into a larger file.
    /// Root and field locations are returned unchanged.
    pub fn shift_lines(self, lines: usize) -> Self {
        match self.location {
            Location::Position { line, column } => Self {
                location: Location::Position {
                    line: line + lines,
                    column,
                },
                reason: self.reason,
            },
            _ => self,
        }
    }

    /// The line number, for positional errors.
    pub fn line(&self) -> Option<usize> {
        match self.location {
            Location::Position { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Parsed content breaks a content invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field '{field}': {reason}")]
pub struct ValidationError {
    /// Path of the offending field.
    pub field: FieldPath,
    /// Why the value was rejected.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: FieldPath, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Top-level error type for whole-document pipelines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HpageError {
    /// The front matter could not be parsed.
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),

    /// The front matter parsed but is not a valid home page.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
