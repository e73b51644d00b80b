//! Outbound ports (driven side - SPI)

use crate::domain::BlockTemplate;
use crate::error::Result;
use qc_06_mempool::MempoolTransaction;

/// Port: Fetch candidate transactions from the mempool
pub trait MempoolSource: Send + Sync {
    /// All candidates, in snapshot order
    fn load_transactions(&self) -> Result<Vec<MempoolTransaction>>;
}

/// Port: Persist or publish a finished block template
pub trait BlockSink: Send + Sync {
    /// Write the template
    fn write_block(&self, template: &BlockTemplate) -> Result<()>;
}
