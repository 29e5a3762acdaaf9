use chrono::{Local, NaiveDate};

use crate::core::services::{DashboardSummary, ExpenseService, SummaryService};
use crate::errors::LedgerResult;
use crate::ledger::{default_categories, Budget, ExpenseFilter, ExpenseInput, ExpenseRecord, Ledger};
use crate::storage::{self, KeyValueStore};

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Facade that owns the current ledger and budget and keeps them persisted.
///
/// State is read from the store once, in [`ExpenseTracker::open`]. Every
/// successful mutation writes the new state to the store before it replaces the
/// in-memory copy, so a failed write leaves both sides as they were.
pub struct ExpenseTracker {
    ledger: Ledger,
    budget: Budget,
    categories: Vec<String>,
    storage: Box<dyn KeyValueStore>,
    clock: Clock,
}

impl ExpenseTracker {
    pub fn open(store: Box<dyn KeyValueStore>) -> LedgerResult<Self> {
        let ledger = storage::load_ledger(store.as_ref())?;
        let budget = storage::load_budget(store.as_ref())?;
        tracing::info!(
            expenses = ledger.len(),
            budget = ?budget.limit(),
            "expense tracker opened"
        );
        Ok(Self {
            ledger,
            budget,
            categories: default_categories(),
            storage: store,
            clock: Box::new(|| Local::now().date_naive()),
        })
    }

    /// Replaces the source of "today", used to date new and edited records.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn add(&mut self, input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
        self.apply(None, input)
    }

    pub fn update(&mut self, index: usize, input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
        self.apply(Some(index), input)
    }

    pub fn delete(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        let (updated, removed) = ExpenseService::delete_at(&self.ledger, index)?;
        self.commit(updated)?;
        Ok(removed)
    }

    /// Form values for editing the record at `index`, if it exists.
    pub fn edit_form(&self, index: usize) -> Option<ExpenseInput> {
        self.ledger
            .get(index)
            .map(|record| ExpenseInput::from_record(record, &self.categories))
    }

    /// Parses and stores the budget field; blank input clears the budget.
    pub fn set_budget(&mut self, raw: &str) -> LedgerResult<Budget> {
        let budget = Budget::parse(raw)?;
        storage::save_budget(self.storage.as_ref(), &budget)?;
        self.budget = budget;
        tracing::info!(budget = ?budget.limit(), "monthly budget updated");
        Ok(budget)
    }

    pub fn spent_this_month(&self) -> f64 {
        SummaryService::spent_in_month_of(&self.ledger, self.today())
    }

    pub fn summary(&self, filter: &ExpenseFilter) -> DashboardSummary {
        SummaryService::dashboard(&self.ledger, &self.budget, filter, self.today())
    }

    fn apply(&mut self, index: Option<usize>, input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
        let today = self.today();
        let (updated, record) =
            ExpenseService::add_or_update(&self.ledger, index, input, &self.budget, today)?;
        self.commit(updated)?;
        Ok(record)
    }

    fn commit(&mut self, updated: Ledger) -> LedgerResult<()> {
        storage::save_ledger(self.storage.as_ref(), &updated)?;
        self.ledger = updated;
        Ok(())
    }
}
