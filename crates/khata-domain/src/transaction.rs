//! Domain model for income/expense ledger entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ledger entry.
///
/// Field names are pinned to the persisted wire format: a slot file holds a
/// JSON array of `{id, desc, amount, type, category, date}` objects with the
/// date rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with income positive and expense negative, so that summing
    /// signed amounts over any group yields that group's net.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Year-month grouping key, e.g. `2024-03`. Lexicographic order on these
    /// keys equals chronological order.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Classifies an entry as money in or money out. Closed set.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
