//! Core domain entities for the mempool snapshot.

use super::errors::MempoolError;
use serde::Serialize;

/// Transaction identifier as it appears in the snapshot.
pub type TxId = String;

/// A transaction waiting for block inclusion.
///
/// Immutable once constructed. The constructor is the only way to build one,
/// so every instance satisfies INVARIANT-2 and INVARIANT-3.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MempoolTransaction {
    txid: TxId,
    fee: u64,
    weight: u64,
    parents: Vec<TxId>,
}

impl MempoolTransaction {
    /// Creates a validated transaction.
    ///
    /// # Errors
    /// - [`MempoolError::EmptyTxId`] if `txid` or any parent id is empty
    /// - [`MempoolError::ZeroWeight`] if `weight` is zero
    pub fn new(
        txid: impl Into<TxId>,
        fee: u64,
        weight: u64,
        parents: Vec<TxId>,
    ) -> Result<Self, MempoolError> {
        let txid = txid.into();
        if txid.is_empty() {
            return Err(MempoolError::EmptyTxId);
        }
        if weight == 0 {
            return Err(MempoolError::ZeroWeight { txid });
        }
        if parents.iter().any(String::is_empty) {
            return Err(MempoolError::EmptyParentId { txid });
        }

        Ok(Self {
            txid,
            fee,
            weight,
            parents,
        })
    }

    /// Transaction id.
    pub fn txid(&self) -> &str {
        &self.txid
    }

    /// Fee paid to the block producer.
    pub fn fee(&self) -> u64 {
        self.fee
    }

    /// Block space consumed. Always positive.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Parent ids in declaration order.
    pub fn parents(&self) -> &[TxId] {
        &self.parents
    }

    /// Returns true if the transaction spends no other mempool transaction.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
