//! Invariant checkers for block production
//!
//! These functions re-verify an assembled block against the candidates it
//! was built from. Selection already enforces each rule; a failure here is an
//! internal logic error.

use super::block::Block;
use crate::error::{BlockProductionError, Result};
use qc_06_mempool::MempoolTransaction;
use std::collections::{HashMap, HashSet};

/// INVARIANT-1: Weight Limit
/// The sum of included weights MUST NOT exceed the block weight limit.
pub fn check_weight_limit(block: &Block) -> Result<()> {
    if block.weight() > block.max_weight() {
        return Err(BlockProductionError::WeightLimitExceeded {
            weight: block.weight(),
            max_weight: block.max_weight(),
        });
    }
    Ok(())
}

/// INVARIANT-2: No Duplicates
/// No transaction id appears more than once.
pub fn check_no_duplicates(block: &Block) -> Result<()> {
    let mut seen = HashSet::new();
    for txid in block.transactions() {
        if !seen.insert(txid.as_str()) {
            return Err(BlockProductionError::DuplicateInclusion {
                txid: txid.clone(),
            });
        }
    }
    Ok(())
}

/// INVARIANT-3: Parent Inclusion
/// Every parent of an included transaction is included, and earlier.
pub fn check_parent_inclusion(
    block: &Block,
    lookup: &HashMap<&str, &MempoolTransaction>,
) -> Result<()> {
    let mut committed = HashSet::new();
    for txid in block.transactions() {
        let tx = lookup
            .get(txid.as_str())
            .ok_or_else(|| BlockProductionError::UnknownTransaction {
                txid: txid.clone(),
            })?;
        if let Some(parent) = tx.parents().iter().find(|p| !committed.contains(p.as_str())) {
            return Err(BlockProductionError::MissingParent {
                txid: txid.clone(),
                parent: parent.clone(),
            });
        }
        committed.insert(txid.as_str());
    }
    Ok(())
}

/// INVARIANT-4: Exact Totals
/// Running totals equal the sums over the included set, each counted once.
pub fn check_totals(block: &Block, lookup: &HashMap<&str, &MempoolTransaction>) -> Result<()> {
    let mut weight: u64 = 0;
    let mut fees: u64 = 0;
    for txid in block.transactions() {
        let tx = lookup
            .get(txid.as_str())
            .ok_or_else(|| BlockProductionError::UnknownTransaction {
                txid: txid.clone(),
            })?;
        weight = weight.saturating_add(tx.weight());
        fees = fees.saturating_add(tx.fee());
    }

    if weight != block.weight() {
        return Err(BlockProductionError::TotalsMismatch {
            field: "weight",
            recorded: block.weight(),
            expected: weight,
        });
    }
    if fees != block.fees() {
        return Err(BlockProductionError::TotalsMismatch {
            field: "fees",
            recorded: block.fees(),
            expected: fees,
        });
    }
    Ok(())
}

/// Validate all invariants for an assembled block
pub fn validate_block(block: &Block, candidates: &[MempoolTransaction]) -> Result<()> {
    let lookup: HashMap<&str, &MempoolTransaction> =
        candidates.iter().map(|tx| (tx.txid(), tx)).collect();

    check_weight_limit(block)?;
    check_no_duplicates(block)?;
    check_parent_inclusion(block, &lookup)?;
    check_totals(block, &lookup)
}
