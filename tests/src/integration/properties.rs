//! # Selection Properties
//!
//! Random mempools, including unknown parents and cycles, checked against
//! the block invariants in both selection modes.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;
    use proptest::sample::Index;
    use proptest::test_runner::Config as ProptestConfig;
    use qc_06_mempool::MempoolTransaction;
    use qc_17_block_production::domain::is_fee_rate_ordered;
    use qc_17_block_production::{validate_block, SelectionMode, TransactionSelector};

    /// (fee, weight, parent picks, unknown parent, forward parent)
    type Row = (u64, u64, Vec<Index>, bool, Option<Index>);

    fn arb_row() -> impl Strategy<Value = Row> {
        (
            0u64..1_000,
            1u64..500,
            prop::collection::vec(any::<Index>(), 0..3),
            prop::bool::weighted(0.1),
            prop::option::weighted(0.05, any::<Index>()),
        )
    }

    /// Parents mostly point backwards; a forward pick can close a cycle.
    fn build(rows: Vec<Row>) -> Vec<MempoolTransaction> {
        let n = rows.len();
        rows.into_iter()
            .enumerate()
            .map(|(i, (fee, weight, picks, unknown, forward))| {
                let mut parents: Vec<String> = Vec::new();
                if i > 0 {
                    for pick in picks {
                        let parent = format!("t{}", pick.index(i));
                        if !parents.contains(&parent) {
                            parents.push(parent);
                        }
                    }
                }
                if unknown {
                    parents.push(format!("ghost{i}"));
                }
                if let Some(pick) = forward {
                    let target = pick.index(n);
                    if target != i {
                        let parent = format!("t{target}");
                        if !parents.contains(&parent) {
                            parents.push(parent);
                        }
                    }
                }
                MempoolTransaction::new(format!("t{i}"), fee, weight, parents).unwrap()
            })
            .collect()
    }

    fn arb_mempool() -> impl Strategy<Value = Vec<MempoolTransaction>> {
        prop::collection::vec(arb_row(), 0..40).prop_map(build)
    }

    fn arb_mode() -> impl Strategy<Value = SelectionMode> {
        prop_oneof![Just(SelectionMode::Cascading), Just(SelectionMode::Strict)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            failure_persistence: None,
            .. ProptestConfig::default()
        })]

        #[test]
        fn prop_block_satisfies_invariants(
            txs in arb_mempool(),
            capacity in 0u64..5_000,
            mode in arb_mode(),
        ) {
            let outcome = TransactionSelector::new(capacity, mode).select(&txs).unwrap();
            let block = &outcome.block;

            prop_assert!(block.weight() <= capacity);
            prop_assert!(validate_block(block, &txs).is_ok());

            let unique: HashSet<&String> = block.transactions().iter().collect();
            prop_assert_eq!(unique.len(), block.len());
            prop_assert_eq!(outcome.stats.included(), block.len() as u64);
        }

        #[test]
        fn prop_parked_transactions_lack_a_parent(
            txs in arb_mempool(),
            capacity in 0u64..5_000,
        ) {
            let outcome = TransactionSelector::new(capacity, SelectionMode::Cascading)
                .select(&txs)
                .unwrap();
            let by_id: HashMap<&str, &MempoolTransaction> =
                txs.iter().map(|tx| (tx.txid(), tx)).collect();

            for id in &outcome.parked {
                prop_assert!(!outcome.block.contains(id));
                let tx = by_id[id.as_str()];
                prop_assert!(tx.parents().iter().any(|p| !outcome.block.contains(p)));
            }
        }

        #[test]
        fn prop_excluded_roots_did_not_fit(
            txs in arb_mempool(),
            capacity in 0u64..5_000,
            mode in arb_mode(),
        ) {
            // Space only shrinks, so a root that was skipped must still be
            // too heavy for what is left.
            let outcome = TransactionSelector::new(capacity, mode).select(&txs).unwrap();
            let remaining = outcome.block.remaining_weight();

            for tx in txs.iter().filter(|tx| tx.is_root()) {
                if !outcome.block.contains(tx.txid()) {
                    prop_assert!(tx.weight() > remaining);
                }
            }
        }

        #[test]
        fn prop_roots_only_block_is_fee_rate_ordered(
            rows in prop::collection::vec((0u64..1_000, 1u64..500), 0..60),
            capacity in 0u64..10_000,
        ) {
            let txs: Vec<MempoolTransaction> = rows
                .into_iter()
                .enumerate()
                .map(|(i, (fee, weight))| {
                    MempoolTransaction::new(format!("r{i}"), fee, weight, vec![]).unwrap()
                })
                .collect();
            let by_id: HashMap<&str, &MempoolTransaction> =
                txs.iter().map(|tx| (tx.txid(), tx)).collect();

            let outcome = TransactionSelector::new(capacity, SelectionMode::Cascading)
                .select(&txs)
                .unwrap();

            let included = outcome.block.transactions().iter().map(|id| by_id[id.as_str()]);
            prop_assert!(is_fee_rate_ordered(included));
        }

        #[test]
        fn prop_selection_is_deterministic(
            txs in arb_mempool(),
            capacity in 0u64..5_000,
        ) {
            let selector = TransactionSelector::new(capacity, SelectionMode::Cascading);
            let first = selector.select(&txs).unwrap();
            let second = selector.select(&txs).unwrap();

            prop_assert_eq!(first.block.transactions(), second.block.transactions());
            prop_assert_eq!(first.parked, second.parked);
        }
    }
}
