//! # Adapters - Mempool Snapshot Loading
//!
//! - `snapshot`: reads delimited snapshot files into `MempoolTransaction`s

pub mod snapshot;

pub use snapshot::*;
