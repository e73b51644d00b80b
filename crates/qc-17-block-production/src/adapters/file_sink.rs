//! File output adapter
//!
//! Writes the block file (one transaction id per line, admission order), the
//! result file (three-line totals message) and, optionally, a JSON summary.

use crate::domain::BlockTemplate;
use crate::error::{BlockProductionError, Result};
use crate::ports::BlockSink;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Block sink backed by plain files
#[derive(Clone, Debug)]
pub struct FileBlockSink {
    block_path: PathBuf,
    result_path: PathBuf,
    summary_path: Option<PathBuf>,
}

impl FileBlockSink {
    /// Create a sink writing `block_path` and `result_path`
    pub fn new(block_path: impl Into<PathBuf>, result_path: impl Into<PathBuf>) -> Self {
        Self {
            block_path: block_path.into(),
            result_path: result_path.into(),
            summary_path: None,
        }
    }

    /// Also write a JSON summary
    pub fn with_summary(mut self, summary_path: Option<PathBuf>) -> Self {
        self.summary_path = summary_path;
        self
    }

    /// Block file path
    pub fn block_path(&self) -> &Path {
        &self.block_path
    }

    /// Result file path
    pub fn result_path(&self) -> &Path {
        &self.result_path
    }

    fn write_block_file(&self, template: &BlockTemplate) -> Result<()> {
        let file = File::create(&self.block_path).map_err(|e| output_error(&self.block_path, e))?;
        let mut out = BufWriter::new(file);
        for txid in &template.transactions {
            writeln!(out, "{txid}").map_err(|e| output_error(&self.block_path, e))?;
        }
        out.flush().map_err(|e| output_error(&self.block_path, e))
    }

    fn write_text(path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|e| output_error(path, e))
    }
}

fn output_error(path: &Path, source: std::io::Error) -> BlockProductionError {
    BlockProductionError::Output {
        path: path.to_path_buf(),
        source,
    }
}

impl BlockSink for FileBlockSink {
    fn write_block(&self, template: &BlockTemplate) -> Result<()> {
        self.write_block_file(template)?;
        Self::write_text(&self.result_path, &format!("{}\n", template.result_message()))?;

        if let Some(path) = &self.summary_path {
            Self::write_text(path, &template.to_json()?)?;
            debug!(path = %path.display(), "Wrote JSON summary");
        }

        info!(
            block = %self.block_path.display(),
            result = %self.result_path.display(),
            transactions = template.transaction_count(),
            "Block written"
        );
        Ok(())
    }
}
