//! Summary counters over the in-memory transaction list.

use crate::transaction::{Transaction, TransactionKind};

/// The four dashboard counters. Cheap to recompute, so it is rebuilt on every
/// render instead of being cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Transactions with kind `cash_in`.
    pub deposits: usize,
    /// Transactions with kind `cash_out`.
    pub withdrawals: usize,
    /// Transactions whose status is "completed" or "received" (any casing).
    pub completed: usize,
    /// Transactions whose status is "pending" (any casing).
    pub pending: usize,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut summary = Summary::default();
        for tx in transactions {
            match tx.kind {
                TransactionKind::CashIn => summary.deposits += 1,
                TransactionKind::CashOut => summary.withdrawals += 1,
            }
            let status = tx.status.to_lowercase();
            if status == "completed" || status == "received" {
                summary.completed += 1;
            } else if status == "pending" {
                summary.pending += 1;
            }
        }
        summary
    }
}
