//! Integration tests across the mempool and block production crates.

pub mod properties;
pub mod selection_flows;
