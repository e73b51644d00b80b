//! # Quantum-Chain Test Suite
//!
//! Cross-crate tests for block production.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Mempool generators shared by tests and benches
//! └── integration/
//!     ├── selection_flows.rs   # Snapshot file -> service -> block files
//!     └── properties.rs        # Property tests over random mempools
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::selection_flows
//! cargo test -p qc-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```

pub mod fixtures;
pub mod integration;
