use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::TransactionKind;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: R$ {:.2}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}

/// Append-only record of the operations performed on one account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one entry; entries are never edited or removed afterwards.
    pub fn record(&mut self, kind: TransactionKind, amount: Decimal, at: DateTime<Local>) {
        self.entries.push(LedgerEntry {
            kind,
            amount,
            timestamp: at,
        });
    }

    /// Number of withdrawals recorded on the given local calendar day.
    pub fn withdrawals_on(&self, day: NaiveDate) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == TransactionKind::Withdrawal)
            .filter(|entry| entry.timestamp.date_naive() == day)
            .count()
    }
}
