//! Validated add, edit, and delete operations over a ledger.

use chrono::NaiveDate;

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{
    check_budget, month_key, resolve_category, validate_amount, Budget, ExpenseInput,
    ExpenseRecord, Ledger,
};

/// Applies expense mutations without touching the caller's ledger on failure.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates `input` and either appends it (`index == None`) or replaces the
    /// record at `index`, returning the resulting ledger and record.
    ///
    /// Checks run in order (category, amount, budget) and the first failure is
    /// returned. The record is dated `today`; an edit keeps the record's id.
    pub fn add_or_update(
        ledger: &Ledger,
        index: Option<usize>,
        input: &ExpenseInput,
        budget: &Budget,
        today: NaiveDate,
    ) -> LedgerResult<(Ledger, ExpenseRecord)> {
        let category = resolve_category(&input.category, &input.custom_category)?;
        let amount = validate_amount(&input.amount)?;

        let target_month = month_key(today);
        let previous = match index {
            Some(index) => Some(ledger.get(index).ok_or(LedgerError::IndexOutOfRange {
                index,
                len: ledger.len(),
            })?),
            None => None,
        };
        let previous_amount = previous
            .filter(|record| record.month_key() == target_month)
            .map_or(0.0, |record| record.amount);
        check_budget(ledger, budget, &target_month, previous_amount, amount)?;

        let mut record = ExpenseRecord::new(today, amount, category, input.note.as_str());
        if let Some(previous) = previous {
            record.id = previous.id;
        }

        let mut updated = ledger.clone();
        match index {
            Some(index) => {
                updated.replace(index, record.clone())?;
                tracing::info!(index, amount, category = %record.category, "expense updated");
            }
            None => {
                updated.push(record.clone());
                tracing::info!(amount, category = %record.category, "expense added");
            }
        }
        Ok((updated, record))
    }

    /// Removes the record at `index`. An index outside the ledger is reported as
    /// [`LedgerError::IndexOutOfRange`] rather than ignored.
    pub fn delete_at(ledger: &Ledger, index: usize) -> LedgerResult<(Ledger, ExpenseRecord)> {
        let mut updated = ledger.clone();
        let removed = updated.remove(index)?;
        tracing::info!(index, amount = removed.amount, "expense deleted");
        Ok((updated, removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::CUSTOM_CATEGORY;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn ledger_with(records: &[(NaiveDate, f64, &str)]) -> Ledger {
        Ledger::from_records(
            records
                .iter()
                .map(|(date, amount, category)| ExpenseRecord::new(*date, *amount, *category, ""))
                .collect(),
        )
    }

    #[test]
    fn append_on_empty_ledger_without_budget() {
        let (ledger, record) = ExpenseService::add_or_update(
            &Ledger::new(),
            None,
            &ExpenseInput::new("50", "Food").with_note("  dinner "),
            &Budget::unset(),
            today(),
        )
        .unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(record.date, today());
        assert_eq!(record.note, "dinner");
        assert_eq!(ledger.month_to_date_total("2024-06"), 50.0);
    }

    #[test]
    fn category_error_wins_over_amount_error() {
        let input = ExpenseInput {
            amount: "abc".into(),
            category: CUSTOM_CATEGORY.into(),
            custom_category: "  ".into(),
            note: String::new(),
        };
        let err =
            ExpenseService::add_or_update(&Ledger::new(), None, &input, &Budget::unset(), today())
                .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCategory));
    }

    #[test]
    fn budget_rejection_leaves_ledger_unchanged() {
        let ledger = ledger_with(&[(today(), 80.0, "Food")]);
        let before = ledger.clone();
        let budget = Budget::monthly(100.0).unwrap();
        let err = ExpenseService::add_or_update(
            &ledger,
            None,
            &ExpenseInput::new("30", "Food"),
            &budget,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::BudgetExceeded { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn editing_down_near_ceiling_succeeds() {
        let ledger = ledger_with(&[(today(), 80.0, "Food")]);
        let original_id = ledger.records()[0].id;
        let budget = Budget::monthly(100.0).unwrap();
        let (updated, record) = ExpenseService::add_or_update(
            &ledger,
            Some(0),
            &ExpenseInput::new("60", "Food"),
            &budget,
            today(),
        )
        .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.records()[0].amount, 60.0);
        assert_eq!(record.id, original_id);
    }

    #[test]
    fn editing_record_from_earlier_month_counts_full_new_amount() {
        let last_month = NaiveDate::from_ymd_opt(2024, 5, 30).unwrap();
        let ledger = ledger_with(&[(last_month, 90.0, "Food"), (today(), 70.0, "Rent")]);
        let budget = Budget::monthly(100.0).unwrap();
        let err = ExpenseService::add_or_update(
            &ledger,
            Some(0),
            &ExpenseInput::new("40", "Food"),
            &budget,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::BudgetExceeded { attempted, .. } if attempted == 110.0));
    }

    #[test]
    fn edit_preserves_position() {
        let ledger = ledger_with(&[
            (today(), 1.0, "Food"),
            (today(), 2.0, "Transport"),
            (today(), 3.0, "Health"),
        ]);
        let (updated, _) = ExpenseService::add_or_update(
            &ledger,
            Some(1),
            &ExpenseInput::custom("9", "Pets"),
            &Budget::unset(),
            today(),
        )
        .unwrap();
        let categories: Vec<_> = updated
            .records()
            .iter()
            .map(|record| record.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Food", "Pets", "Health"]);
    }

    #[test]
    fn edit_out_of_range_is_an_error() {
        let err = ExpenseService::add_or_update(
            &Ledger::new(),
            Some(0),
            &ExpenseInput::new("5", "Food"),
            &Budget::unset(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LedgerError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn delete_returns_removed_record() {
        let ledger = ledger_with(&[(today(), 1.0, "Food"), (today(), 2.0, "Transport")]);
        let (updated, removed) = ExpenseService::delete_at(&ledger, 0).unwrap();
        assert_eq!(removed.category, "Food");
        assert_eq!(updated.len(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn delete_out_of_range_is_an_error() {
        let err = ExpenseService::delete_at(&Ledger::new(), 4).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange { .. }));
    }
}
