use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense::ExpenseRecord;
use crate::errors::{LedgerError, LedgerResult};

/// Grouping key shared by budget checks and monthly charts: the `YYYY-MM`
/// prefix of the ISO date.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Inclusive date window check; a missing bound is open.
pub(crate) fn within_dates(
    record: &ExpenseRecord,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    start.map_or(true, |start| record.date >= start) && end.map_or(true, |end| record.date <= end)
}

/// Substring match on category or note. `needle` must already be lowercase;
/// an empty needle matches every record.
pub(crate) fn matches_search(record: &ExpenseRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.category.to_lowercase().contains(needle)
        || record.note.to_lowercase().contains(needle)
}

/// Ordered list of expenses. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(expenses: Vec<ExpenseRecord>) -> Self {
        Self { expenses }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn into_records(self) -> Vec<ExpenseRecord> {
        self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.expenses.get(index)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.expenses.iter().position(|record| record.id == id)
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.expenses.push(record);
    }

    /// Replaces the record at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, record: ExpenseRecord) -> LedgerResult<ExpenseRecord> {
        let len = self.expenses.len();
        let slot = self
            .expenses
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, record))
    }

    pub fn remove(&mut self, index: usize) -> LedgerResult<ExpenseRecord> {
        if index >= self.expenses.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        Ok(self.expenses.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|record| record.amount).sum()
    }

    pub fn month_to_date_total(&self, month: &str) -> f64 {
        self.expenses
            .iter()
            .filter(|record| record.month_key() == month)
            .map(|record| record.amount)
            .sum()
    }

    /// Keeps records dated within `start..=end`; a missing bound is open.
    pub fn filter_by_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Ledger {
        self.retain_matching(|record| within_dates(record, start, end))
    }

    /// Case-insensitive substring match on category or note. The text is used
    /// as typed, surrounding whitespace included.
    pub fn filter_by_search(&self, text: &str) -> Ledger {
        if text.is_empty() {
            return self.clone();
        }
        let needle = text.to_lowercase();
        self.retain_matching(|record| matches_search(record, &needle))
    }

    /// Per-category sums in the order each category first appears.
    pub fn category_totals(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for record in &self.expenses {
            match totals.iter_mut().find(|(name, _)| *name == record.category) {
                Some((_, sum)) => *sum += record.amount,
                None => totals.push((record.category.clone(), record.amount)),
            }
        }
        totals
    }

    /// Per-month sums keyed by `YYYY-MM`, ascending.
    pub fn monthly_totals(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for record in &self.expenses {
            *totals.entry(record.month_key()).or_insert(0.0) += record.amount;
        }
        totals
    }

    fn retain_matching<F>(&self, keep: F) -> Ledger
    where
        F: Fn(&ExpenseRecord) -> bool,
    {
        Ledger::from_records(
            self.expenses
                .iter()
                .filter(|record| keep(record))
                .cloned()
                .collect(),
        )
    }
}
