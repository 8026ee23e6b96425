//! Error types for the recordcheck core library
//!
//! Schema construction and codec delegation are the only fallible operations in
//! this crate. Validation failures live in `recordcheck-validation`.

use thiserror::Error;

/// Main error type for schema and record operations
#[derive(Error, Debug)]
pub enum Error {
    /// A schema violated one of the consistency guarantees of the IDL compiler
    #[error("Invalid schema '{schema}': {message}")]
    InvalidSchema {
        schema: String,
        message: String,
        field: Option<String>,
    },

    /// The external codec failed to read or write a record
    #[error("Codec error while {operation} '{record}': {message}")]
    Codec {
        operation: CodecOperation,
        record: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Direction of a codec call, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOperation {
    Read,
    Write,
}

impl std::fmt::Display for CodecOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecOperation::Read => write!(f, "reading"),
            CodecOperation::Write => write!(f, "writing"),
        }
    }
}

impl Error {
    pub(crate) fn invalid_schema<S, M>(schema: S, message: M, field: Option<&str>) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Error::InvalidSchema {
            schema: schema.into(),
            message: message.into(),
            field: field.map(str::to_string),
        }
    }

    /// Wrap a codec failure with the record it concerned
    pub fn codec<R, M>(operation: CodecOperation, record: R, message: M, source: Option<anyhow::Error>) -> Self
    where
        R: Into<String>,
        M: Into<String>,
    {
        Error::Codec {
            operation,
            record: record.into(),
            message: message.into(),
            source,
        }
    }
}
