//! # Parent Resolution
//!
//! A transaction whose parents are not yet in the block is parked instead of
//! dropped. When a parent is committed, every transaction parked on it has its
//! missing-parent count decremented; those that reach zero are re-evaluated
//! (including the weight check) and, if committed, wake their own children.
//!
//! ```text
//! evaluate(tx)
//!   ├─ weight does not fit ──→ [REJECTED]   (final for this run)
//!   ├─ parent(s) missing ────→ [PARKED]     (one entry per missing parent)
//!   └─ ready ──→ commit ──→ cascade(tx)
//!                               │
//!                               └─ for each waiter, FIFO:
//!                                    count -= 1
//!                                    count == 0 → evaluate(waiter) ──→ ...
//! ```
//!
//! The cascade runs on an explicit stack of waiter lists, so chain depth does
//! not grow the call stack. The visiting order is the same as a depth-first
//! recursive wake-up: a committed waiter's children are resolved before its
//! next sibling.
//!
//! Cycles and parents absent from the mempool simply never bring the count to
//! zero. Such transactions stay parked and are reported at the end.

use super::block::Block;
use super::entities::SelectionStats;
use crate::error::Result;
use qc_06_mempool::{MempoolTransaction, TxId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Outcome of a single evaluation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Committed to the block
    Committed,

    /// Waiting on `missing` parents
    Parked {
        /// Parents not yet in the block
        missing: usize,
    },

    /// Did not fit the remaining weight; never revisited
    RejectedWeight,
}

/// Index of parked transactions.
///
/// A transaction has an entry in `missing_count` exactly while it is parked.
/// `waiting_on` holds one entry per (parent, waiter) edge that was missing at
/// evaluation time.
#[derive(Debug, Default)]
pub struct PendingIndex<'a> {
    waiting_on: HashMap<&'a str, Vec<&'a MempoolTransaction>>,
    missing_count: HashMap<&'a str, usize>,
}

impl<'a> PendingIndex<'a> {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, parent: &'a str, waiter: &'a MempoolTransaction) {
        self.waiting_on.entry(parent).or_default().push(waiter);
        *self.missing_count.entry(waiter.txid()).or_insert(0) += 1;
    }

    fn take_waiters(&mut self, parent: &str) -> Vec<&'a MempoolTransaction> {
        self.waiting_on.remove(parent).unwrap_or_default()
    }

    /// Decrement the count for `waiter`. Returns true when it reached zero,
    /// in which case the entry is gone.
    fn resolve_one(&mut self, waiter: &str) -> bool {
        let Some(count) = self.missing_count.get_mut(waiter) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.missing_count.remove(waiter);
            return true;
        }
        false
    }

    /// True if `txid` is waiting on at least one parent
    pub fn is_parked(&self, txid: &str) -> bool {
        self.missing_count.contains_key(txid)
    }

    /// Parents still missing for `txid`
    pub fn missing_parents(&self, txid: &str) -> Option<usize> {
        self.missing_count.get(txid).copied()
    }

    /// Number of parked transactions
    pub fn parked_count(&self) -> usize {
        self.missing_count.len()
    }

    /// Number of parents that have at least one waiter
    pub fn awaited_parent_count(&self) -> usize {
        self.waiting_on.len()
    }

    /// Parked ids, sorted
    pub fn parked_ids(&self) -> Vec<TxId> {
        let mut ids: Vec<TxId> = self.missing_count.keys().map(|id| id.to_string()).collect();
        ids.sort();
        ids
    }
}

/// Drives admission of transactions whose parents may arrive later.
///
/// Owns the [`PendingIndex`] and the set of weight-rejected ids; the block is
/// passed in by the caller.
#[derive(Debug, Default)]
pub struct DependencyResolver<'a> {
    pending: PendingIndex<'a>,
    rejected: HashSet<&'a str>,
    stats: SelectionStats,
}

impl<'a> DependencyResolver<'a> {
    /// Create a resolver with no parked transactions
    pub fn new() -> Self {
        Self::default()
    }

    /// Parked-transaction index
    pub fn pending(&self) -> &PendingIndex<'a> {
        &self.pending
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> SelectionStats {
        let mut stats = self.stats;
        stats.parked = self.pending.parked_count() as u64;
        stats
    }

    /// True if a decision other than "not seen yet" exists for `txid`.
    ///
    /// The main pass must skip such transactions: evaluating them again would
    /// register their missing parents twice or commit them twice.
    pub fn is_decided(&self, block: &Block, txid: &str) -> bool {
        block.contains(txid) || self.pending.is_parked(txid) || self.rejected.contains(txid)
    }

    /// Evaluate `tx` against `block`, cascading to parked children on commit.
    pub fn evaluate(&mut self, block: &mut Block, tx: &'a MempoolTransaction) -> Result<Admission> {
        let admission = self.admit(block, tx)?;
        match admission {
            Admission::Committed => {
                self.stats.committed += 1;
                self.cascade(block, tx.txid())?;
            }
            Admission::RejectedWeight => self.stats.weight_rejected += 1,
            Admission::Parked { .. } => {}
        }
        Ok(admission)
    }

    /// Wake transactions parked on `committed`.
    ///
    /// Returns the number of transactions committed by this cascade.
    pub fn cascade(&mut self, block: &mut Block, committed: &str) -> Result<u64> {
        let mut admitted = 0;
        let mut stack = vec![self.pending.take_waiters(committed).into_iter()];

        while let Some(waiters) = stack.last_mut() {
            let Some(waiter) = waiters.next() else {
                stack.pop();
                continue;
            };
            if !self.pending.resolve_one(waiter.txid()) {
                continue;
            }

            match self.admit(block, waiter)? {
                Admission::Committed => {
                    debug!(txid = waiter.txid(), root = committed, "Cascade admitted");
                    admitted += 1;
                    stack.push(self.pending.take_waiters(waiter.txid()).into_iter());
                }
                Admission::RejectedWeight => self.stats.weight_rejected += 1,
                // Every registered parent has been committed at this point.
                Admission::Parked { .. } => {}
            }
        }

        self.stats.cascade_committed += admitted;
        Ok(admitted)
    }

    fn admit(&mut self, block: &mut Block, tx: &'a MempoolTransaction) -> Result<Admission> {
        if !block.fits(tx) {
            debug!(
                txid = tx.txid(),
                weight = tx.weight(),
                remaining = block.remaining_weight(),
                "Rejected: does not fit"
            );
            self.rejected.insert(tx.txid());
            return Ok(Admission::RejectedWeight);
        }

        // Register every missing parent, not just the first one; a partially
        // registered waiter would never reach a zero count.
        let mut missing = 0;
        for parent in tx.parents() {
            if !block.contains(parent) {
                self.pending.register(parent, tx);
                missing += 1;
            }
        }
        if missing > 0 {
            debug!(txid = tx.txid(), missing, "Parked: waiting on parents");
            return Ok(Admission::Parked { missing });
        }

        block.commit(tx)?;
        Ok(Admission::Committed)
    }
}
