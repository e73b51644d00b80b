//! # Block Builder
//!
//! Wires the mempool snapshot reader, the block production service and the
//! file sink into a single run.
//!
//! ```text
//! mempool.csv ──► SnapshotMempoolSource ──► BlockBuilderService ──► FileBlockSink
//!                                                                   ├─ block.txt
//!                                                                   ├─ result.txt
//!                                                                   └─ summary.json (optional)
//! ```

pub mod cli;

pub use cli::Cli;

use anyhow::{Context, Result};
use qc_17_block_production::{
    BlockBuilderApi, BlockBuilderService, BlockProductionConfig, BlockTemplate, FileBlockSink,
    SnapshotMempoolSource,
};
use quantum_telemetry::log_block_event;

/// Subsystem label attached to structured events
pub const SUBSYSTEM: &str = "block-production";

/// Build one block with a resolved configuration.
pub fn run(config: &BlockProductionConfig) -> Result<BlockTemplate> {
    let _span = quantum_telemetry::subsystem_span!("build_block", subsystem = SUBSYSTEM).entered();

    let reader = config.snapshot_reader()?;
    let source = SnapshotMempoolSource::new(&config.mempool.path, reader);
    let sink = FileBlockSink::new(&config.output.block_path, &config.output.result_path)
        .with_summary(config.output.summary_json.clone());

    let service = BlockBuilderService::new(source, sink, config);
    let template = service
        .build_block()
        .with_context(|| format!("building block from {}", config.mempool.path.display()))?;

    log_block_event!(
        info,
        SUBSYSTEM,
        "Block assembled",
        template.transaction_count(),
        template.total_weight,
        template.total_fees,
        parked = template.parked.len()
    );
    Ok(template)
}
