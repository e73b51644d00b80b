//! In-memory block sink

use crate::domain::BlockTemplate;
use crate::error::Result;
use crate::ports::BlockSink;
use std::sync::Mutex;

/// Keeps every template it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    blocks: Mutex<Vec<BlockTemplate>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates received so far
    pub fn blocks(&self) -> Vec<BlockTemplate> {
        self.blocks
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Most recent template
    pub fn last(&self) -> Option<BlockTemplate> {
        self.blocks().pop()
    }
}

impl BlockSink for RecordingSink {
    fn write_block(&self, template: &BlockTemplate) -> Result<()> {
        let mut guard = self
            .blocks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.push(template.clone());
        Ok(())
    }
}
