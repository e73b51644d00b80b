//! # Transaction Pool (Mempool) Snapshot
//!
//! **Subsystem ID:** 6
//! **Role:** Source of candidate transactions for block assembly
//!
//! ## Purpose
//!
//! Holds the immutable view of the mempool that block production selects
//! from. Each entry carries a fee, a weight and the ids of the parent
//! transactions that must already be in a block before the entry may join it.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | No duplicate transaction ids | `adapters/snapshot.rs` - `SnapshotReader::read()` |
//! | INVARIANT-2 | Weight is strictly positive | `domain/entities.rs` - `MempoolTransaction::new()` |
//! | INVARIANT-3 | Ids (own and parents) are non-empty | `domain/entities.rs` - `MempoolTransaction::new()` |
//!
//! Parents may reference ids that are not in the snapshot. That is not an
//! error here: block production simply never admits such a transaction.
//!
//! ## Snapshot Format
//!
//! ```text
//! txid,fee,weight,parent_txids
//! 2e3da8fb...,452,1620,
//! 9d317fb3...,9380,1200,2e3da8fb...;6eb38fb8...
//! ```
//!
//! The field delimiter and the parent delimiter are configurable but must
//! differ. Malformed records abort the load with the offending line number.
//!
//! ## Module Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/snapshot.rs - SnapshotReader (file / BufRead loader)  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs - MempoolTransaction, TxId                  │
//! │  domain/record.rs   - RecordFormat, parse_record                │
//! │  domain/errors.rs   - MempoolError                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;

pub use adapters::*;
pub use domain::*;
