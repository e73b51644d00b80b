//! Domain entities for block production

use super::block::Block;
use crate::error::{BlockProductionError, Result};
use crate::metrics::MetricsSnapshot;
use chrono::{DateTime, Utc};
use qc_06_mempool::TxId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How transactions with parents outside the block are handled
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Park the transaction until every parent is committed, then admit it
    #[default]
    Cascading,

    /// Admit only if every parent is already in the block; never revisit
    Strict,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cascading => f.write_str("cascading"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = BlockProductionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascading" => Ok(Self::Cascading),
            "strict" => Ok(Self::Strict),
            other => Err(BlockProductionError::InvalidConfig(format!(
                "unknown selection mode {other:?} (expected cascading or strict)"
            ))),
        }
    }
}

/// Counters for a single selection run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    /// Candidates handed to the selector
    pub candidates: u64,

    /// Evaluations started by the main pass
    pub evaluated: u64,

    /// Transactions committed by the main pass
    pub committed: u64,

    /// Transactions committed after their last parent arrived
    pub cascade_committed: u64,

    /// Transactions that did not fit the remaining weight
    pub weight_rejected: u64,

    /// Transactions rejected for missing parents (strict mode only)
    pub parent_rejected: u64,

    /// Transactions still waiting on a parent when selection ended
    pub parked: u64,

    /// Candidates skipped because a decision already existed for their id
    pub skipped: u64,
}

impl SelectionStats {
    /// Total transactions in the block
    pub fn included(&self) -> u64 {
        self.committed + self.cascade_committed
    }
}

/// Result of one selection run, before it is turned into a template
#[derive(Debug)]
pub struct SelectionOutcome {
    /// The assembled block
    pub block: Block,

    /// Ids still waiting on parents, sorted
    pub parked: Vec<TxId>,

    /// Run counters
    pub stats: SelectionStats,

    /// Mode the run used
    pub mode: SelectionMode,
}

impl SelectionOutcome {
    /// Freeze the outcome into a block template
    pub fn into_template(self, selection_time_us: u64) -> BlockTemplate {
        BlockTemplate {
            total_weight: self.block.weight(),
            total_fees: self.block.fees(),
            max_weight: self.block.max_weight(),
            transactions: self.block.into_transactions(),
            selection_mode: self.mode,
            parked: self.parked,
            stats: self.stats,
            selection_time_us,
            metrics: MetricsSnapshot::default(),
            created_at: Utc::now(),
        }
    }
}

/// Block template created by this subsystem
#[derive(Clone, Debug, Serialize)]
pub struct BlockTemplate {
    /// Selected transaction ids in admission order
    pub transactions: Vec<TxId>,

    /// Total weight of all transactions
    pub total_weight: u64,

    /// Total fee revenue
    pub total_fees: u64,

    /// Block weight limit used for selection
    pub max_weight: u64,

    /// Selection mode used
    pub selection_mode: SelectionMode,

    /// Transactions left waiting on parents
    pub parked: Vec<TxId>,

    /// Selection counters
    pub stats: SelectionStats,

    /// Wall time spent selecting (microseconds)
    pub selection_time_us: u64,

    /// Cumulative counters of the producing service, including this block
    pub metrics: MetricsSnapshot,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl BlockTemplate {
    /// Number of transactions in the block
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Human-readable summary written next to the block
    pub fn result_message(&self) -> String {
        format!(
            "Total Number of transactions in the block: {}\n\
             Total Weight of Block: {}\n\
             Total Fee of all transactions in the block: {}",
            self.transaction_count(),
            self.total_weight,
            self.total_fees
        )
    }

    /// JSON summary of the template
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BlockProductionError::SerializationError(e.to_string()))
    }
}
