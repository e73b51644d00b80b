//! Block under construction.
//!
//! Tracks running weight and fee totals together with the set of committed
//! transaction ids. Totals only grow; nothing is ever evicted.

use crate::error::{BlockProductionError, Result};
use qc_06_mempool::{MempoolTransaction, TxId};
use std::collections::HashSet;

/// Weight-bounded accumulator of committed transactions
#[derive(Clone, Debug)]
pub struct Block {
    max_weight: u64,
    weight: u64,
    fees: u64,
    included: HashSet<TxId>,
    order: Vec<TxId>,
}

impl Block {
    /// Create an empty block with the given weight limit
    pub fn new(max_weight: u64) -> Self {
        Self {
            max_weight,
            weight: 0,
            fees: 0,
            included: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Weight limit
    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Weight used so far
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Fees collected so far
    pub fn fees(&self) -> u64 {
        self.fees
    }

    /// Weight still available
    pub fn remaining_weight(&self) -> u64 {
        self.max_weight.saturating_sub(self.weight)
    }

    /// Number of committed transactions
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing has been committed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if `txid` has been committed
    pub fn contains(&self, txid: &str) -> bool {
        self.included.contains(txid)
    }

    /// Committed ids in admission order
    pub fn transactions(&self) -> &[TxId] {
        &self.order
    }

    /// Consume the block, returning ids in admission order
    pub fn into_transactions(self) -> Vec<TxId> {
        self.order
    }

    /// True if `tx` fits in the remaining weight
    pub fn fits(&self, tx: &MempoolTransaction) -> bool {
        tx.weight() <= self.remaining_weight()
    }

    /// True if every parent of `tx` is already committed
    pub fn has_all_parents(&self, tx: &MempoolTransaction) -> bool {
        tx.parents().iter().all(|p| self.included.contains(p))
    }

    /// Commit `tx`.
    ///
    /// Callers check [`fits`](Self::fits) and
    /// [`has_all_parents`](Self::has_all_parents) first; a violated
    /// precondition is reported instead of corrupting the totals.
    pub fn commit(&mut self, tx: &MempoolTransaction) -> Result<()> {
        if self.contains(tx.txid()) {
            return Err(BlockProductionError::DuplicateInclusion {
                txid: tx.txid().to_string(),
            });
        }
        if !self.fits(tx) {
            return Err(BlockProductionError::WeightLimitExceeded {
                weight: self.weight.saturating_add(tx.weight()),
                max_weight: self.max_weight,
            });
        }
        if let Some(parent) = tx.parents().iter().find(|p| !self.included.contains(*p)) {
            return Err(BlockProductionError::MissingParent {
                txid: tx.txid().to_string(),
                parent: parent.clone(),
            });
        }
        let fees = self
            .fees
            .checked_add(tx.fee())
            .ok_or_else(|| BlockProductionError::FeeOverflow {
                txid: tx.txid().to_string(),
            })?;

        self.weight += tx.weight();
        self.fees = fees;
        self.included.insert(tx.txid().to_string());
        self.order.push(tx.txid().to_string());
        Ok(())
    }
}
