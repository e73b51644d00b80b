//! Error types for block production subsystem

use qc_06_mempool::MempoolError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for block production operations
pub type Result<T> = std::result::Result<T, BlockProductionError>;

/// Errors that can occur during block production
///
/// Weight rejections and unsatisfiable parents are normal selection outcomes
/// and never surface here.
#[derive(Debug, Error)]
pub enum BlockProductionError {
    /// Mempool snapshot could not be loaded
    #[error("Mempool error: {0}")]
    Mempool(#[from] MempoolError),

    /// Block weight would exceed the configured maximum
    #[error("Block weight exceeded: weight {weight}, max {max_weight}")]
    WeightLimitExceeded {
        /// Weight after the offending commit
        weight: u64,
        /// Configured block weight limit
        max_weight: u64,
    },

    /// Transaction committed twice
    #[error("Duplicate transaction in block: {txid}")]
    DuplicateInclusion {
        /// Repeated transaction id
        txid: String,
    },

    /// Transaction committed before one of its parents
    #[error("Transaction {txid} included without parent {parent}")]
    MissingParent {
        /// Child transaction
        txid: String,
        /// Parent absent from the block
        parent: String,
    },

    /// Block references a transaction that was never a candidate
    #[error("Unknown transaction in block: {txid}")]
    UnknownTransaction {
        /// Transaction id
        txid: String,
    },

    /// Running totals disagree with the included set
    #[error("Block {field} mismatch: recorded {recorded}, recomputed {expected}")]
    TotalsMismatch {
        /// Total name (weight, fees)
        field: &'static str,
        /// Value tracked by the block
        recorded: u64,
        /// Value recomputed from included transactions
        expected: u64,
    },

    /// Fee total does not fit in 64 bits
    #[error("Fee total overflow while adding {txid}")]
    FeeOverflow {
        /// Transaction being committed
        txid: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing block output failed
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        /// Destination path
        path: PathBuf,
        /// I/O cause
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BlockProductionError {
    /// Check if error is a broken block invariant (internal logic error)
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::WeightLimitExceeded { .. }
                | Self::DuplicateInclusion { .. }
                | Self::MissingParent { .. }
                | Self::UnknownTransaction { .. }
                | Self::TotalsMismatch { .. }
        )
    }

    /// Check if error was caused by the input rather than by this subsystem
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Mempool(_) | Self::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_classification() {
        assert!(BlockProductionError::DuplicateInclusion { txid: "a".into() }
            .is_invariant_violation());
        assert!(BlockProductionError::WeightLimitExceeded {
            weight: 11,
            max_weight: 10
        }
        .is_invariant_violation());
        assert!(!BlockProductionError::InvalidConfig("x".into()).is_invariant_violation());
    }

    #[test]
    fn test_input_classification() {
        let err: BlockProductionError = MempoolError::EmptyTxId.into();
        assert!(err.is_input_error());
        assert!(!BlockProductionError::FeeOverflow { txid: "a".into() }.is_input_error());
    }
}
