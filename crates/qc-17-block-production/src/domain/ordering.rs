//! Fee-rate priority ordering.
//!
//! Rates are compared by cross-multiplication in `u128`, so two rates that
//! are mathematically equal always compare equal and no precision is lost.

use qc_06_mempool::MempoolTransaction;
use std::cmp::Ordering;

/// Fee per unit of weight, kept as an exact fraction.
#[derive(Copy, Clone, Debug)]
pub struct FeeRate {
    fee: u64,
    weight: u64,
}

impl FeeRate {
    /// Create a rate. `weight` must be non-zero.
    pub fn new(fee: u64, weight: u64) -> Self {
        debug_assert!(weight > 0, "fee rate with zero weight");
        Self { fee, weight }
    }

    /// Rate of a mempool transaction
    pub fn of(tx: &MempoolTransaction) -> Self {
        Self::new(tx.fee(), tx.weight())
    }

    /// Approximate value, for logs and reports only
    pub fn as_f64(&self) -> f64 {
        self.fee as f64 / self.weight as f64
    }
}

impl PartialEq for FeeRate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FeeRate {}

impl PartialOrd for FeeRate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeeRate {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.fee) * u128::from(other.weight);
        let rhs = u128::from(other.fee) * u128::from(self.weight);
        lhs.cmp(&rhs)
    }
}

/// Order candidates by fee rate, highest first.
///
/// The sort is stable: transactions with equal rates keep their input order,
/// which decides who wins when the block is nearly full.
pub fn sort_by_fee_rate(candidates: &[MempoolTransaction]) -> Vec<&MempoolTransaction> {
    let mut ordered: Vec<&MempoolTransaction> = candidates.iter().collect();
    ordered.sort_by(|a, b| FeeRate::of(b).cmp(&FeeRate::of(a)));
    ordered
}

/// Returns true if `transactions` is in non-increasing fee-rate order.
pub fn is_fee_rate_ordered<'a>(
    transactions: impl IntoIterator<Item = &'a MempoolTransaction>,
) -> bool {
    let mut previous: Option<FeeRate> = None;
    for tx in transactions {
        let rate = FeeRate::of(tx);
        if previous.is_some_and(|prev| rate > prev) {
            return false;
        }
        previous = Some(rate);
    }
    true
}
