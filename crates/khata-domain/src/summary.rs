//! View selectors and aggregate output types.
//!
//! These are the shapes the aggregation pipeline hands to a presentation
//! layer: the filtered list selection, global totals, and the two chart
//! series (expense-by-category, net-by-month).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Restricts a list view by entry kind.
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Income => kind == TransactionKind::Income,
            KindFilter::Expense => kind == TransactionKind::Expense,
        }
    }

    /// Parses the `all | income | expense` selector labels a frontend sends.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(KindFilter::All),
            other => TransactionKind::from_label(other).map(|kind| match kind {
                TransactionKind::Income => KindFilter::Income,
                TransactionKind::Expense => KindFilter::Expense,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Restricts a list view to a single category label, or passes everything.
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(label: impl Into<String>) -> Self {
        CategoryFilter::Named(label.into())
    }

    /// Maps the reserved `all` label to the pass-through filter; any other
    /// label selects that category verbatim.
    pub fn from_label(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(label) => label == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Global sums over the full record list, independent of any active filter.
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Everything a frontend needs to render one frame: the filtered and
/// date-sorted list plus the unfiltered aggregates.
pub struct LedgerView {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    pub expense_by_category: BTreeMap<String, f64>,
    pub net_by_month: BTreeMap<String, f64>,
}
