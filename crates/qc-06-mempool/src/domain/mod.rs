//! # Domain Layer - Mempool Snapshot
//!
//! Pure types and parsing. No file access happens here.
//!
//! ## Components
//!
//! - `entities`: MempoolTransaction, TxId
//! - `record`: RecordFormat and single-line record parsing
//! - `errors`: MempoolError enumeration

pub mod entities;
pub mod errors;
pub mod record;

pub use entities::*;
pub use errors::*;
pub use record::*;
