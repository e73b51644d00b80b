//! Transaction selector service (core domain logic)

use super::block::Block;
use super::entities::{SelectionMode, SelectionOutcome, SelectionStats};
use super::ordering::sort_by_fee_rate;
use super::resolver::DependencyResolver;
use crate::error::Result;
use qc_06_mempool::MempoolTransaction;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Transaction selector
///
/// Greedy, single pass in fee-rate order. A transaction rejected for weight
/// is never reconsidered; nothing is ever removed from the block.
#[derive(Clone, Debug)]
pub struct TransactionSelector {
    /// Block weight limit
    max_block_weight: u64,

    /// Handling of transactions whose parents are not yet included
    mode: SelectionMode,
}

impl TransactionSelector {
    /// Create new transaction selector
    pub fn new(max_block_weight: u64, mode: SelectionMode) -> Self {
        Self {
            max_block_weight,
            mode,
        }
    }

    /// Block weight limit
    pub fn max_block_weight(&self) -> u64 {
        self.max_block_weight
    }

    /// Selection mode
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Select transactions for one block.
    ///
    /// Complexity: O(n log n) for ordering plus O(n + e) for admission, where
    /// e is the number of parent links.
    #[tracing::instrument(skip(self, candidates), fields(candidate_count = candidates.len(), mode = %self.mode))]
    pub fn select(&self, candidates: &[MempoolTransaction]) -> Result<SelectionOutcome> {
        let ordered = sort_by_fee_rate(candidates);

        debug!(
            max_block_weight = self.max_block_weight,
            "Starting greedy selection"
        );

        let outcome = match self.mode {
            SelectionMode::Cascading => self.select_cascading(&ordered)?,
            SelectionMode::Strict => self.select_strict(&ordered)?,
        };

        if !outcome.parked.is_empty() {
            warn!(
                parked = outcome.parked.len(),
                "Transactions left waiting on parents that never entered the block"
            );
        }
        info!(
            selected = outcome.block.len(),
            weight = outcome.block.weight(),
            max_weight = self.max_block_weight,
            fees = outcome.block.fees(),
            "Transaction selection complete"
        );

        Ok(outcome)
    }

    fn select_cascading(&self, ordered: &[&MempoolTransaction]) -> Result<SelectionOutcome> {
        let mut block = Block::new(self.max_block_weight);
        let mut resolver = DependencyResolver::new();
        let mut evaluated = 0;
        let mut skipped = 0;

        for &tx in ordered {
            // A cascade may already have decided this id; evaluating it again
            // would count its fee and weight twice.
            if resolver.is_decided(&block, tx.txid()) {
                skipped += 1;
                continue;
            }
            evaluated += 1;
            resolver.evaluate(&mut block, tx)?;
        }

        let stats = SelectionStats {
            candidates: ordered.len() as u64,
            evaluated,
            skipped,
            ..resolver.stats()
        };
        let parked = resolver.pending().parked_ids();

        Ok(SelectionOutcome {
            block,
            parked,
            stats,
            mode: SelectionMode::Cascading,
        })
    }

    fn select_strict(&self, ordered: &[&MempoolTransaction]) -> Result<SelectionOutcome> {
        let mut block = Block::new(self.max_block_weight);
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stats = SelectionStats {
            candidates: ordered.len() as u64,
            ..Default::default()
        };

        for &tx in ordered {
            if !seen.insert(tx.txid()) {
                stats.skipped += 1;
                continue;
            }
            stats.evaluated += 1;

            if !block.fits(tx) {
                stats.weight_rejected += 1;
                continue;
            }
            if !block.has_all_parents(tx) {
                debug!(txid = tx.txid(), "Rejected: parents not in block");
                stats.parent_rejected += 1;
                continue;
            }
            block.commit(tx)?;
            stats.committed += 1;
        }

        Ok(SelectionOutcome {
            block,
            parked: Vec::new(),
            stats,
            mode: SelectionMode::Strict,
        })
    }
}
