//! Mempool error types.
//!
//! Every variant describes malformed input. Loading stops at the first one.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mempool operations
pub type Result<T> = std::result::Result<T, MempoolError>;

/// Mempool error type.
#[derive(Debug, Error)]
pub enum MempoolError {
    /// Transaction id is empty.
    #[error("Transaction id is empty")]
    EmptyTxId,

    /// A parent id in the parent list is empty.
    #[error("Transaction {txid} lists an empty parent id")]
    EmptyParentId {
        /// Transaction declaring the parent list
        txid: String,
    },

    /// Weight of zero would make the fee rate undefined.
    #[error("Transaction {txid} has zero weight")]
    ZeroWeight {
        /// Offending transaction
        txid: String,
    },

    /// The same id appears twice in one snapshot.
    #[error("Duplicate transaction: {txid}")]
    DuplicateTransaction {
        /// Repeated id
        txid: String,
    },

    /// Record does not have the expected number of fields.
    #[error("Expected {expected} fields, found {found}")]
    FieldCount {
        /// Required field count
        expected: usize,
        /// Actual field count
        found: usize,
    },

    /// Numeric field could not be parsed.
    #[error("Invalid {field}: {value:?}")]
    InvalidNumber {
        /// Field name (fee, weight)
        field: &'static str,
        /// Raw text
        value: String,
    },

    /// Field and parent delimiters must differ.
    #[error("Field delimiter and parent delimiter are both {0:?}")]
    AmbiguousDelimiters(char),

    /// A record failed validation; wraps the cause with its location.
    #[error("Line {line}: {source}")]
    InvalidRecord {
        /// 1-based line number in the snapshot
        line: usize,
        /// Underlying error
        #[source]
        source: Box<MempoolError>,
    },

    /// Snapshot could not be opened.
    #[error("Failed to open mempool snapshot {}: {source}", path.display())]
    Open {
        /// Snapshot path
        path: PathBuf,
        /// I/O cause
        #[source]
        source: std::io::Error,
    },

    /// Reading from an open snapshot failed.
    #[error("Failed to read mempool snapshot: {0}")]
    Io(#[from] std::io::Error),
}

impl MempoolError {
    /// Attach a line number to a record-level error.
    pub fn at_line(self, line: usize) -> Self {
        Self::InvalidRecord {
            line,
            source: Box::new(self),
        }
    }

    /// Line number for record-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}
