//! Metrics collection for block production subsystem

use crate::domain::BlockTemplate;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for block production
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total blocks produced
    pub blocks_produced: AtomicU64,

    /// Total transactions included
    pub transactions_included: AtomicU64,

    /// Transactions included through parent resolution
    pub cascade_admissions: AtomicU64,

    /// Transactions rejected for weight
    pub weight_rejections: AtomicU64,

    /// Transactions left parked at the end of a run
    pub parked_transactions: AtomicU64,

    /// Total weight across all blocks
    pub total_weight: AtomicU64,

    /// Total fees collected
    pub total_fees_collected: AtomicU64,

    /// Total transaction selection time (microseconds)
    pub selection_time_us: AtomicU64,
}

/// Point-in-time copy of [`Metrics`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Blocks produced
    pub blocks_produced: u64,
    /// Transactions included
    pub transactions_included: u64,
    /// Cascade admissions
    pub cascade_admissions: u64,
    /// Weight rejections
    pub weight_rejections: u64,
    /// Parked at end of run
    pub parked_transactions: u64,
    /// Total weight
    pub total_weight: u64,
    /// Total fees
    pub total_fees_collected: u64,
    /// Selection time (microseconds)
    pub selection_time_us: u64,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a produced block template
    pub fn record_block_produced(&self, template: &BlockTemplate) {
        self.blocks_produced.fetch_add(1, Ordering::Relaxed);
        self.transactions_included
            .fetch_add(template.transaction_count() as u64, Ordering::Relaxed);
        self.cascade_admissions
            .fetch_add(template.stats.cascade_committed, Ordering::Relaxed);
        self.weight_rejections
            .fetch_add(template.stats.weight_rejected, Ordering::Relaxed);
        self.parked_transactions
            .fetch_add(template.stats.parked, Ordering::Relaxed);
        self.total_weight
            .fetch_add(template.total_weight, Ordering::Relaxed);
        self.total_fees_collected
            .fetch_add(template.total_fees, Ordering::Relaxed);
        self.selection_time_us
            .fetch_add(template.selection_time_us, Ordering::Relaxed);
    }

    /// Get blocks produced
    pub fn get_blocks_produced(&self) -> u64 {
        self.blocks_produced.load(Ordering::Relaxed)
    }

    /// Get average transactions per block
    pub fn get_avg_transactions_per_block(&self) -> f64 {
        let blocks = self.blocks_produced.load(Ordering::Relaxed);
        if blocks == 0 {
            return 0.0;
        }
        let txs = self.transactions_included.load(Ordering::Relaxed);
        txs as f64 / blocks as f64
    }

    /// Get average selection time (microseconds)
    pub fn get_avg_selection_time(&self) -> f64 {
        let blocks = self.blocks_produced.load(Ordering::Relaxed);
        if blocks == 0 {
            return 0.0;
        }
        let time = self.selection_time_us.load(Ordering::Relaxed);
        time as f64 / blocks as f64
    }

    /// Copy all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            blocks_produced: self.blocks_produced.load(Ordering::Relaxed),
            transactions_included: self.transactions_included.load(Ordering::Relaxed),
            cascade_admissions: self.cascade_admissions.load(Ordering::Relaxed),
            weight_rejections: self.weight_rejections.load(Ordering::Relaxed),
            parked_transactions: self.parked_transactions.load(Ordering::Relaxed),
            total_weight: self.total_weight.load(Ordering::Relaxed),
            total_fees_collected: self.total_fees_collected.load(Ordering::Relaxed),
            selection_time_us: self.selection_time_us.load(Ordering::Relaxed),
        }
    }
}
