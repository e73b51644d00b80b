//! Adapters (outer layer)
//!
//! - [`mempool`]: candidate sources backed by a snapshot file or memory
//! - [`file_sink`]: block and result files
//! - [`memory`]: in-process sink for tests and embedding

pub mod file_sink;
pub mod memory;
pub mod mempool;

pub use file_sink::FileBlockSink;
pub use memory::RecordingSink;
pub use mempool::{InMemoryMempool, SnapshotMempoolSource};
