//! Inbound ports (driving side - API)

use crate::domain::BlockTemplate;
use crate::error::Result;

/// Primary port: build one block from the current mempool
pub trait BlockBuilderApi: Send + Sync {
    /// Load candidates, select, validate and emit a block template
    fn build_block(&self) -> Result<BlockTemplate>;
}
