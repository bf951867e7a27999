//! Pure filter/aggregate pipeline over the record list.
//!
//! Every function re-derives its output from the full list on each call;
//! nothing here caches, mutates, or touches storage. Totals and both chart
//! series are always computed over the unfiltered list, so summary figures
//! reflect all records regardless of the active list filter.

use std::collections::BTreeMap;

use khata_domain::{CategoryFilter, KindFilter, LedgerView, Totals, Transaction};

pub struct SummaryService;

impl SummaryService {
    /// Records matching both filter predicates, in input order.
    pub fn filtered(
        records: &[Transaction],
        kind: KindFilter,
        category: &CategoryFilter,
    ) -> Vec<Transaction> {
        records
            .iter()
            .filter(|txn| kind.matches(txn.kind) && category.matches(&txn.category))
            .cloned()
            .collect()
    }

    /// Most recent first. The sort is stable, so equal dates keep their
    /// relative order and re-sorting sorted input is an identity.
    pub fn sorted_by_date_desc(records: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Global income/expense/balance sums.
    pub fn totals(records: &[Transaction]) -> Totals {
        let income: f64 = records
            .iter()
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum();
        let expense: f64 = records
            .iter()
            .filter(|txn| txn.is_expense())
            .map(|txn| txn.amount)
            .sum();
        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Expense sums per category. Only categories with at least one expense
    /// record appear.
    pub fn expense_by_category(records: &[Transaction]) -> BTreeMap<String, f64> {
        let mut sums = BTreeMap::new();
        for txn in records.iter().filter(|txn| txn.is_expense()) {
            *sums.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        sums
    }

    /// Per-month `income - expense` over all records, keyed `YYYY-MM`. The
    /// BTreeMap keeps months in ascending chronological order; months
    /// without records are absent.
    pub fn net_by_month(records: &[Transaction]) -> BTreeMap<String, f64> {
        let mut nets = BTreeMap::new();
        for txn in records {
            *nets.entry(txn.month_key()).or_insert(0.0) += txn.signed_amount();
        }
        nets
    }

    /// One render-ready frame: the filtered, date-sorted list plus the
    /// unfiltered aggregates.
    pub fn view(records: &[Transaction], kind: KindFilter, category: &CategoryFilter) -> LedgerView {
        LedgerView {
            transactions: Self::sorted_by_date_desc(&Self::filtered(records, kind, category)),
            totals: Self::totals(records),
            expense_by_category: Self::expense_by_category(records),
            net_by_month: Self::net_by_month(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use khata_domain::TransactionKind;

    fn txn(id: u64, amount: f64, kind: TransactionKind, category: &str, date: &str) -> Transaction {
        Transaction::new(
            id,
            format!("txn-{id}"),
            amount,
            kind,
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, 50000.0, TransactionKind::Income, "Work", "2024-03-01"),
            txn(2, 150.0, TransactionKind::Expense, "Food", "2024-03-05"),
            txn(3, 9000.0, TransactionKind::Expense, "Rent", "2024-04-01"),
            txn(4, 300.0, TransactionKind::Expense, "Food", "2024-04-02"),
            txn(5, 2000.0, TransactionKind::Income, "Other", "2024-04-15"),
        ]
    }

    #[test]
    fn filtering_is_idempotent_and_preserves_order() {
        let records = sample();
        let once = SummaryService::filtered(&records, KindFilter::Expense, &CategoryFilter::All);
        let twice = SummaryService::filtered(&once, KindFilter::Expense, &CategoryFilter::All);
        assert_eq!(once, twice);
        let ids: Vec<u64> = once.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn kind_filters_partition_the_list() {
        let records = sample();
        let income = SummaryService::filtered(&records, KindFilter::Income, &CategoryFilter::All);
        let expense = SummaryService::filtered(&records, KindFilter::Expense, &CategoryFilter::All);
        assert_eq!(income.len() + expense.len(), records.len());
        assert!(income.iter().all(|t| !expense.contains(t)));
    }

    #[test]
    fn category_filter_composes_with_kind_filter() {
        let records = sample();
        let food =
            SummaryService::filtered(&records, KindFilter::Expense, &CategoryFilter::named("Food"));
        assert_eq!(food.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn sort_is_descending_stable_and_idempotent() {
        let mut records = sample();
        // Same date as id 3 to exercise the tie.
        records.push(txn(6, 10.0, TransactionKind::Expense, "Food", "2024-04-01"));

        let sorted = SummaryService::sorted_by_date_desc(&records);
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 6, 2, 1]);

        let resorted = SummaryService::sorted_by_date_desc(&sorted);
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn totals_cover_the_full_list() {
        let totals = SummaryService::totals(&sample());
        assert_eq!(totals.income, 52000.0);
        assert_eq!(totals.expense, 9450.0);
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn expense_by_category_omits_expense_free_categories() {
        let by_category = SummaryService::expense_by_category(&sample());
        assert_eq!(by_category.get("Food"), Some(&450.0));
        assert_eq!(by_category.get("Rent"), Some(&9000.0));
        // Income-only categories never chart.
        assert!(!by_category.contains_key("Work"));
        assert!(!by_category.contains_key("Other"));

        let total: f64 = by_category.values().sum();
        assert_eq!(total, SummaryService::totals(&sample()).expense);
    }

    #[test]
    fn net_by_month_orders_months_ascending() {
        let nets = SummaryService::net_by_month(&sample());
        let months: Vec<&String> = nets.keys().collect();
        assert_eq!(months, vec!["2024-03", "2024-04"]);
        assert_eq!(nets["2024-03"], 49850.0);
        assert_eq!(nets["2024-04"], 2000.0 - 9300.0);
    }

    #[test]
    fn view_filters_the_list_but_not_the_aggregates() {
        let records = sample();
        let view = SummaryService::view(
            &records,
            KindFilter::Expense,
            &CategoryFilter::named("Food"),
        );
        assert_eq!(view.transactions.len(), 2);
        // Aggregates stay global.
        assert_eq!(view.totals, SummaryService::totals(&records));
        assert_eq!(
            view.expense_by_category,
            SummaryService::expense_by_category(&records)
        );
        assert_eq!(view.net_by_month, SummaryService::net_by_month(&records));
    }

    #[test]
    fn empty_list_produces_empty_aggregates() {
        let view = SummaryService::view(&[], KindFilter::All, &CategoryFilter::All);
        assert!(view.transactions.is_empty());
        assert_eq!(view.totals, Totals::default());
        assert!(view.expense_by_category.is_empty());
        assert!(view.net_by_month.is_empty());
    }
}
