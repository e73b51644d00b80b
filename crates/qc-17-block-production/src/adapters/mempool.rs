//! Mempool source adapters

use crate::error::Result;
use crate::ports::MempoolSource;
use qc_06_mempool::{MempoolError, MempoolTransaction, SnapshotReader};
use std::collections::HashSet;
use std::path::PathBuf;

/// Reads candidates from a mempool snapshot file on every call
#[derive(Clone, Debug)]
pub struct SnapshotMempoolSource {
    path: PathBuf,
    reader: SnapshotReader,
}

impl SnapshotMempoolSource {
    /// Create a source for `path`
    pub fn new(path: impl Into<PathBuf>, reader: SnapshotReader) -> Self {
        Self {
            path: path.into(),
            reader,
        }
    }

    /// Snapshot path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl MempoolSource for SnapshotMempoolSource {
    fn load_transactions(&self) -> Result<Vec<MempoolTransaction>> {
        Ok(self.reader.read_path(&self.path)?)
    }
}

/// Fixed candidate list held in memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryMempool {
    transactions: Vec<MempoolTransaction>,
}

impl InMemoryMempool {
    /// Create a source returning `transactions`
    pub fn new(transactions: Vec<MempoolTransaction>) -> Self {
        Self { transactions }
    }
}

impl MempoolSource for InMemoryMempool {
    /// Fails on a repeated id, like [`SnapshotReader`].
    fn load_transactions(&self) -> Result<Vec<MempoolTransaction>> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.transactions.iter().find(|tx| !seen.insert(tx.txid())) {
            return Err(MempoolError::DuplicateTransaction {
                txid: dup.txid().to_string(),
            }
            .into());
        }
        Ok(self.transactions.clone())
    }
}
