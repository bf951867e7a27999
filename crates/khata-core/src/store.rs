//! The record store: owns the canonical transaction list and mirrors every
//! mutation to the persistent slot.

use chrono::{Local, NaiveDate};
use khata_domain::{CategoryFilter, KindFilter, LedgerView, Transaction, TransactionKind};

use crate::{
    error::{CoreError, CoreResult},
    storage::SlotStorage,
    summary_service::SummaryService,
};

/// Validated CRUD surface over the transaction list.
///
/// The list is exclusively owned here; callers read through [`records`]
/// (or [`view`]) and mutate only through this API. Every successful
/// mutation persists the full list synchronously.
///
/// [`records`]: RecordStore::records
/// [`view`]: RecordStore::view
pub struct RecordStore {
    records: Vec<Transaction>,
    next_id: u64,
    storage: Box<dyn SlotStorage>,
}

impl RecordStore {
    /// Opens the store over the given backend, reading whatever the slot
    /// currently holds. A missing or unreadable slot starts the store empty;
    /// load problems are logged, never surfaced.
    pub fn load(storage: Box<dyn SlotStorage>) -> Self {
        let records = match storage.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("failed to read record slot, starting empty: {err}");
                Vec::new()
            }
        };
        // Resume id assignment above everything ever seen; ids are not reused
        // within a store lifetime.
        let next_id = records.iter().map(|txn| txn.id).max().map_or(1, |id| id + 1);
        tracing::info!(count = records.len(), "record store loaded");
        Self {
            records,
            next_id,
            storage,
        }
    }

    /// Validates and appends a new transaction, assigning it a fresh id.
    /// `date` defaults to the local calendar day. A rejected add leaves the
    /// store untouched.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        category: &str,
        date: Option<NaiveDate>,
    ) -> CoreResult<Transaction> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::Validation("description must not be empty".into()));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "amount must be a positive number, got {amount}"
            )));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(CoreError::Validation("category must not be empty".into()));
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let transaction =
            Transaction::new(self.take_id(), description, amount, kind, category, date);
        self.records.push(transaction.clone());
        self.persist()?;
        tracing::debug!(id = transaction.id, %kind, "transaction added");
        Ok(transaction)
    }

    /// Deletes the matching record. Unknown ids are a silent no-op and do
    /// not touch the slot.
    pub fn remove(&mut self, id: u64) -> CoreResult<()> {
        let before = self.records.len();
        self.records.retain(|txn| txn.id != id);
        if self.records.len() == before {
            tracing::debug!(id, "remove skipped, no such transaction");
            return Ok(());
        }
        self.persist()?;
        tracing::debug!(id, "transaction removed");
        Ok(())
    }

    /// Takes the record out of the store and hands its fields back so the
    /// caller can repopulate an edit form; the corrected entry is expected
    /// back through [`add`](RecordStore::add). Re-adding the returned value
    /// verbatim restores an abandoned edit. `None` when the id is unknown.
    pub fn begin_edit(&mut self, id: u64) -> CoreResult<Option<Transaction>> {
        let Some(position) = self.records.iter().position(|txn| txn.id == id) else {
            return Ok(None);
        };
        let transaction = self.records.remove(position);
        self.persist()?;
        tracing::debug!(id, "transaction checked out for editing");
        Ok(Some(transaction))
    }

    /// Swaps the entire contents and persists. Incoming ids are honored and
    /// the id counter moves past them.
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> CoreResult<()> {
        if let Some(highest) = records.iter().map(|txn| txn.id).max() {
            self.next_id = self.next_id.max(highest + 1);
        }
        self.records = records;
        self.persist()?;
        tracing::info!(count = self.records.len(), "record list replaced");
        Ok(())
    }

    /// Empties the store. The id counter is deliberately not reset.
    pub fn clear_all(&mut self) -> CoreResult<()> {
        self.replace_all(Vec::new())
    }

    /// Read-only view of the records in insertion order.
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Assembles the render-ready view for the given filter selection.
    pub fn view(&self, kind: KindFilter, category: &CategoryFilter) -> LedgerView {
        SummaryService::view(&self.records, kind, category)
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn persist(&self) -> CoreResult<()> {
        self.storage.save(&self.records)
    }
}
