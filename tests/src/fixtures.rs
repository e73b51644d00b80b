//! Mempool generators.

use qc_06_mempool::MempoolTransaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a transaction, panicking on invalid input.
pub fn tx(id: &str, fee: u64, weight: u64, parents: &[&str]) -> MempoolTransaction {
    MempoolTransaction::new(id, fee, weight, parents.iter().map(|p| p.to_string()).collect())
        .expect("valid fixture transaction")
}

/// Shape of a generated mempool
#[derive(Clone, Copy, Debug)]
pub struct MempoolShape {
    /// Number of transactions
    pub size: usize,
    /// Fees are drawn from `0..max_fee`
    pub max_fee: u64,
    /// Weights are drawn from `1..=max_weight`
    pub max_weight: u64,
    /// Chance that a transaction has parents at all
    pub parent_probability: f64,
    /// Chance that a transaction also names a parent missing from the mempool
    pub unknown_parent_probability: f64,
}

impl Default for MempoolShape {
    fn default() -> Self {
        Self {
            size: 1_000,
            max_fee: 10_000,
            max_weight: 4_000,
            parent_probability: 0.3,
            unknown_parent_probability: 0.02,
        }
    }
}

/// Random mempool in which parents always appear earlier than children,
/// apart from the occasional unknown parent.
pub fn random_mempool(seed: u64, shape: MempoolShape) -> Vec<MempoolTransaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut txs = Vec::with_capacity(shape.size);

    for i in 0..shape.size {
        let mut parents = Vec::new();
        if i > 0 && rng.gen_bool(shape.parent_probability) {
            for _ in 0..rng.gen_range(1..=3) {
                let parent = format!("tx{:06}", rng.gen_range(0..i));
                if !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
        }
        if rng.gen_bool(shape.unknown_parent_probability) {
            parents.push(format!("ghost{i:06}"));
        }

        let tx = MempoolTransaction::new(
            format!("tx{i:06}"),
            rng.gen_range(0..shape.max_fee),
            rng.gen_range(1..=shape.max_weight),
            parents,
        )
        .expect("generated ids are non-empty");
        txs.push(tx);
    }

    txs
}

/// Linear chain where each transaction spends the previous one and fee rate
/// rises along the chain, so the whole chain resolves in one cascade.
pub fn rising_chain(len: usize) -> Vec<MempoolTransaction> {
    (0..len)
        .map(|i| {
            let parents = if i == 0 {
                vec![]
            } else {
                vec![format!("c{}", i - 1)]
            };
            MempoolTransaction::new(format!("c{i}"), i as u64 + 1, 1, parents)
                .expect("generated ids are non-empty")
        })
        .collect()
}

/// Render transactions as snapshot text with a header line.
pub fn to_snapshot(txs: &[MempoolTransaction]) -> String {
    let mut out = String::from("txid,fee,weight,parents\n");
    for tx in txs {
        out.push_str(&format!(
            "{},{},{},{}\n",
            tx.txid(),
            tx.fee(),
            tx.weight(),
            tx.parents().join(";")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mempool_is_deterministic() {
        let shape = MempoolShape {
            size: 50,
            ..Default::default()
        };
        assert_eq!(random_mempool(7, shape), random_mempool(7, shape));
    }

    #[test]
    fn test_rising_chain_links() {
        let chain = rising_chain(3);
        assert!(chain[0].is_root());
        assert_eq!(chain[2].parents(), &["c1".to_string()]);
    }
}
