//! Error types for MXF header partition parsing.

use crate::types::MxfUid;
use thiserror::Error;

/// Result type for header partition operations.
pub type Result<T> = std::result::Result<T, MxfError>;

/// Errors that can occur while reading an MXF header partition.
#[derive(Error, Debug)]
pub enum MxfError {
    /// IO error from the byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte source ran out of data.
    #[error("insufficient data: need {needed} bytes, have {available}")]
    InsufficientData { needed: u64, available: u64 },

    /// Invalid KLV framing (bad BER length, truncated key or value).
    #[error("malformed KLV at offset {offset}: {message}")]
    MalformedKlv { offset: u64, message: String },

    /// The header partition was not found at the start of the file.
    #[error("expected the header partition at offset {expected}, found it at offset {actual}")]
    UnexpectedOffset { expected: u64, actual: u64 },

    /// The leading KLV is not a valid header partition pack.
    #[error("invalid partition pack: {0}")]
    InvalidPartitionPack(String),

    /// No primer pack where one is required.
    #[error("could not find primer pack: {0}")]
    MissingPrimer(String),

    /// Bad primer batch header or duplicate local tag.
    #[error("malformed primer pack: {0}")]
    MalformedPrimer(String),

    /// A declared field failed to decode (size mismatch, bad rational, truncation).
    #[error("field decode failed: {message}")]
    FieldDecode { message: String },

    /// A descriptor violated a structural constraint.
    #[error("invalid essence descriptor: {0}")]
    InvalidDescriptor(String),

    /// The strong-reference graph over instance UIDs is not a DAG.
    #[error("cycle detected in the structural metadata graph")]
    CyclicGraph,

    /// A required strong reference did not resolve within the partition.
    #[error("unresolved strong reference to {uid}")]
    UnresolvedStrongRef { uid: MxfUid },

    /// Fatal diagnostics were recorded while reading the partition.
    #[error("{errors} fatal error(s) encountered while reading the header partition")]
    ParseFailed { errors: usize },
}

impl MxfError {
    /// Create a malformed KLV error.
    pub fn malformed_klv(offset: u64, message: impl Into<String>) -> Self {
        MxfError::MalformedKlv {
            offset,
            message: message.into(),
        }
    }

    /// Create a field decode error.
    pub fn field_decode(message: impl Into<String>) -> Self {
        MxfError::FieldDecode {
            message: message.into(),
        }
    }
}
