//! Error types for parsing and matrix operations.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a directive was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("invalid number of arguments")]
    ArgumentCount,

    #[error("invalid argument: {0}")]
    ArgumentValue(String),

    #[error("invalid vertex index")]
    VertexIndex,

    #[error("unknown material `{0}`")]
    UnknownMaterial(String),

    #[error("directive before the first `newmtl`")]
    NoActiveMaterial,
}

/// Crate-wide error type.
///
/// Parse errors carry the offending source line and its 1-based index;
/// matrix errors carry the operation name and the operand shapes. All
/// failures are fail-fast: the first violation aborts the whole call and no
/// partial result is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: expected a `.{expected}` file")]
    InvalidExtension { path: String, expected: &'static str },

    #[error("`{directive}`: {reason}\n| {line_index}: {line}")]
    Directive {
        directive: &'static str,
        reason: DirectiveError,
        line: String,
        line_index: usize,
    },

    #[error("unknown symbol `{symbol}`\n| {line_index}: {line}")]
    UnknownSymbol {
        symbol: String,
        line: String,
        line_index: usize,
    },

    #[error("{operation}: invalid size {rows}x{cols}")]
    InvalidSize {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("{operation}: expected {expected} values, got {actual}")]
    ValueCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{operation}: index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        operation: &'static str,
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
    },

    #[error(
        "{operation}: incompatible shapes {left_rows}x{left_cols} and {right_rows}x{right_cols}"
    )]
    IncompatibleShapes {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("{operation}: zero-length vector")]
    ZeroLength { operation: &'static str },
}

impl Error {
    pub(crate) fn argument_count(directive: &'static str, line: &str, line_index: usize) -> Self {
        Error::Directive {
            directive,
            reason: DirectiveError::ArgumentCount,
            line: line.to_string(),
            line_index,
        }
    }

    pub(crate) fn argument_value(
        directive: &'static str,
        detail: impl Into<String>,
        line: &str,
        line_index: usize,
    ) -> Self {
        Error::Directive {
            directive,
            reason: DirectiveError::ArgumentValue(detail.into()),
            line: line.to_string(),
            line_index,
        }
    }

    pub(crate) fn vertex_index(directive: &'static str, line: &str, line_index: usize) -> Self {
        Error::Directive {
            directive,
            reason: DirectiveError::VertexIndex,
            line: line.to_string(),
            line_index,
        }
    }

    pub(crate) fn unknown_material(
        directive: &'static str,
        name: &str,
        line: &str,
        line_index: usize,
    ) -> Self {
        Error::Directive {
            directive,
            reason: DirectiveError::UnknownMaterial(name.to_string()),
            line: line.to_string(),
            line_index,
        }
    }
}
