//! Mempool snapshot reader.
//!
//! Loads every record of a snapshot, preserving file order. File order is
//! significant: block production breaks fee-rate ties by it.

use crate::domain::{parse_record, MempoolError, MempoolTransaction, RecordFormat, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Reads mempool snapshots in a fixed [`RecordFormat`].
#[derive(Clone, Copy, Debug)]
pub struct SnapshotReader {
    format: RecordFormat,
    has_header: bool,
}

impl Default for SnapshotReader {
    fn default() -> Self {
        Self::new(RecordFormat::default(), true)
    }
}

impl SnapshotReader {
    /// Creates a reader. When `has_header` is set the first line is skipped.
    pub fn new(format: RecordFormat, has_header: bool) -> Self {
        Self { format, has_header }
    }

    /// Record format used by this reader.
    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Load a snapshot file.
    pub fn read_path(&self, path: &Path) -> Result<Vec<MempoolTransaction>> {
        let file = File::open(path).map_err(|source| MempoolError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let transactions = self.read(BufReader::new(file))?;

        info!(
            path = %path.display(),
            transactions = transactions.len(),
            "Loaded mempool snapshot"
        );
        Ok(transactions)
    }

    /// Load a snapshot from any buffered reader.
    ///
    /// Blank lines are ignored. Fails on the first malformed record or on a
    /// repeated transaction id (INVARIANT-1).
    pub fn read<R: BufRead>(&self, reader: R) -> Result<Vec<MempoolTransaction>> {
        let mut transactions = Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            if self.has_header && index == 0 {
                debug!(header = %line.trim(), "Skipping snapshot header");
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let tx = parse_record(&line, &self.format).map_err(|e| e.at_line(line_no))?;
            if !seen.insert(tx.txid().to_string()) {
                return Err(MempoolError::DuplicateTransaction {
                    txid: tx.txid().to_string(),
                }
                .at_line(line_no));
            }
            transactions.push(tx);
        }

        Ok(transactions)
    }
}
