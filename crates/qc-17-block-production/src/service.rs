//! Block builder service
//!
//! Orchestrates one block production run:
//!
//! ```text
//! MempoolSource ──► TransactionSelector ──► validate_block ──► BlockSink
//!                          │
//!                          └──► Metrics
//! ```

use crate::{
    config::BlockProductionConfig,
    domain::{validate_block, BlockTemplate, TransactionSelector},
    error::Result,
    metrics::Metrics,
    ports::{BlockBuilderApi, BlockSink, MempoolSource},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Concrete implementation of [`BlockBuilderApi`]
pub struct BlockBuilderService<M, K> {
    /// Candidate source
    source: M,

    /// Output sink
    sink: K,

    /// Selection strategy
    selector: TransactionSelector,

    /// Shared metrics collector
    metrics: Arc<Metrics>,
}

impl<M: MempoolSource, K: BlockSink> BlockBuilderService<M, K> {
    /// Create a new block builder service
    pub fn new(source: M, sink: K, config: &BlockProductionConfig) -> Self {
        info!("[qc-17] Initializing Block Builder Service");
        info!("  Max Block Weight: {}", config.max_block_weight);
        info!("  Selection Mode: {}", config.selection_mode);

        Self {
            source,
            sink,
            selector: TransactionSelector::new(config.max_block_weight, config.selection_mode),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Share an existing metrics collector
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Metrics collector
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Output sink
    pub fn sink(&self) -> &K {
        &self.sink
    }
}

impl<M: MempoolSource, K: BlockSink> BlockBuilderApi for BlockBuilderService<M, K> {
    fn build_block(&self) -> Result<BlockTemplate> {
        let candidates = self.source.load_transactions()?;

        let started = Instant::now();
        let outcome = self.selector.select(&candidates)?;
        let selection_time_us = started.elapsed().as_micros() as u64;

        if let Err(e) = validate_block(&outcome.block, &candidates) {
            error!("[qc-17] Assembled block failed validation: {}", e);
            return Err(e);
        }

        let mut template = outcome.into_template(selection_time_us);
        self.metrics.record_block_produced(&template);
        template.metrics = self.metrics.snapshot();
        self.sink.write_block(&template)?;

        info!(
            transactions = template.transaction_count(),
            weight = template.total_weight,
            fees = template.total_fees,
            parked = template.parked.len(),
            selection_time_us,
            "[qc-17] Block template produced"
        );
        Ok(template)
    }
}
