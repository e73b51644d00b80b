//! # Quantum Chain - Block Production Engine (Subsystem 17)
//!
//! **Bounded Context:** Block Template Assembly
//! **Architecture Compliance:** DDD + Hexagonal + TDD
//!
//! ## Purpose
//!
//! Builds one block from a mempool snapshot:
//! - Greedy selection in descending fee-rate order (fee / weight), O(n log n)
//! - Hard weight limit; a transaction that does not fit is dropped for good
//! - Parent-before-child ordering: a transaction whose parents are not yet in
//!   the block is parked and admitted the moment its last parent commits
//!
//! ## Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Adapters (Outer)                                   │
//! │  - SnapshotMempoolSource / InMemoryMempool          │
//! │  - FileBlockSink / RecordingSink                    │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Ports (Middle)                                     │
//! │  - Inbound: BlockBuilderApi                         │
//! │  - Outbound: MempoolSource, BlockSink               │
//! └─────────────────────────────────────────────────────┘
//!                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Inner - Pure Logic)                        │
//! │  - TransactionSelector                              │
//! │  - DependencyResolver                               │
//! │  - Block                                            │
//! │  - Invariants: weight limit, parents first, totals  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Critical Invariants
//!
//! 1. **Weight Limit**: sum(tx.weight) ≤ max_block_weight
//! 2. **No Duplicates**: each transaction id appears at most once
//! 3. **Parent Inclusion**: every parent precedes its child in the block
//! 4. **Exact Totals**: reported weight and fees equal the sums over the block
//! 5. **Fee-Rate Priority**: evaluation follows descending fee rate, ties by
//!    snapshot order
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use qc_17_block_production::{
//!     BlockBuilderApi, BlockBuilderService, BlockProductionConfig, FileBlockSink,
//!     SnapshotMempoolSource,
//! };
//!
//! let config = BlockProductionConfig::default();
//! let source = SnapshotMempoolSource::new(&config.mempool.path, config.snapshot_reader()?);
//! let sink = FileBlockSink::new(&config.output.block_path, &config.output.result_path);
//! let template = BlockBuilderService::new(source, sink, &config).build_block()?;
//! println!("{}", template.result_message());
//! ```
//!
//! ## Module Structure
//!
//! - [`domain`]: Pure domain logic (ordering, block, parent resolution)
//! - [`ports`]: Hexagonal architecture interfaces (inbound/outbound)
//! - [`adapters`]: Snapshot input and file/memory output
//! - [`service`]: Orchestration of a single production run

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Mempool and output adapters
pub mod adapters;
/// Domain models and business logic
pub mod domain;
pub mod ports;
pub mod service;

mod config;
mod error;
mod metrics;

pub use config::{
    BlockProductionConfig, MempoolConfig, OutputConfig, ENV_MAX_BLOCK_WEIGHT, ENV_SELECTION_MODE,
};
pub use error::{BlockProductionError, Result};
pub use metrics::{Metrics, MetricsSnapshot};

// Re-export commonly used types
pub use domain::{
    validate_block, Block, BlockTemplate, DependencyResolver, SelectionMode, SelectionOutcome,
    SelectionStats, TransactionSelector,
};

pub use ports::{BlockBuilderApi, BlockSink, MempoolSource};

pub use adapters::{FileBlockSink, InMemoryMempool, RecordingSink, SnapshotMempoolSource};

pub use service::BlockBuilderService;

/// Subsystem identifier
pub const SUBSYSTEM_ID: u8 = 17;

/// Default block weight limit (4 million weight units)
pub const DEFAULT_MAX_BLOCK_WEIGHT: u64 = 4_000_000;
