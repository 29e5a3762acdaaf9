use chrono::NaiveDate;

use super::expense::ExpenseRecord;
use super::ledger::{matches_search, within_dates, Ledger};
use crate::errors::{LedgerError, LedgerResult};

/// View criteria applied before listing or charting expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub search: String,
}

impl ExpenseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw field values; blank date fields leave that side open.
    pub fn from_inputs(start: &str, end: &str, search: &str) -> LedgerResult<Self> {
        Ok(Self {
            start: parse_date_bound(start)?,
            end: parse_date_bound(end)?,
            search: search.to_string(),
        })
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn matches_everything(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.search.is_empty()
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        within_dates(record, self.start, self.end)
            && matches_search(record, &self.search.to_lowercase())
    }

    pub fn apply(&self, ledger: &Ledger) -> Ledger {
        Ledger::from_records(
            ledger
                .records()
                .iter()
                .filter(|record| self.matches(record))
                .cloned()
                .collect(),
        )
    }

    /// Ledger positions of the records that pass this filter, so edits and
    /// deletes issued from a filtered view address the right record.
    pub fn matching_indices(&self, ledger: &Ledger) -> Vec<usize> {
        ledger
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(index, _)| index)
            .collect()
    }
}

pub fn parse_date_bound(raw: &str) -> LedgerResult<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}
