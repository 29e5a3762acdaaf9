use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{is_preset, CUSTOM_CATEGORY};
use crate::errors::{LedgerError, LedgerResult};

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub note: String,
    /// Stable identity across edits. Older snapshots lack it, so one is minted on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            note: note.into().trim().to_string(),
            id: Uuid::new_v4(),
        }
    }

    pub fn month_key(&self) -> String {
        super::ledger::month_key(self.date)
    }

    /// Applies the same amount and category rules as form submission, for
    /// records that arrive from storage instead.
    pub fn check(&self) -> LedgerResult<()> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(LedgerError::InvalidAmount(self.amount.to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::InvalidCategory);
        }
        Ok(())
    }
}

/// Raw form values submitted by the presentation layer; nothing is validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub amount: String,
    /// Preset name or [`CUSTOM_CATEGORY`].
    pub category: String,
    pub custom_category: String,
    pub note: String,
}

impl ExpenseInput {
    pub fn new(amount: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn custom(amount: impl Into<String>, custom_category: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            category: CUSTOM_CATEGORY.to_string(),
            custom_category: custom_category.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Rebuilds the form values for editing an existing record. Categories that
    /// are not presets come back as custom text.
    pub fn from_record(record: &ExpenseRecord, presets: &[String]) -> Self {
        let (category, custom_category) = if is_preset(&record.category, presets) {
            (record.category.clone(), String::new())
        } else {
            (CUSTOM_CATEGORY.to_string(), record.category.clone())
        };
        Self {
            amount: record.amount.to_string(),
            category,
            custom_category,
            note: record.note.clone(),
        }
    }
}

/// Parses a user-entered amount. Only finite values above zero are accepted.
pub fn validate_amount(raw: &str) -> LedgerResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::category::default_categories;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validate_amount_accepts_positive_decimals() {
        assert_eq!(validate_amount("12.50").unwrap(), 12.5);
        assert_eq!(validate_amount(" 7 ").unwrap(), 7.0);
    }

    #[test]
    fn validate_amount_rejects_bad_input() {
        for raw in ["-5", "0", "abc", "", "NaN", "inf", "1e999"] {
            let err = validate_amount(raw).unwrap_err();
            assert!(
                matches!(err, LedgerError::InvalidAmount(_)),
                "`{raw}` should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn note_is_trimmed_on_creation() {
        let record = ExpenseRecord::new(date(2024, 3, 2), 4.0, "Food", "  lunch ");
        assert_eq!(record.note, "lunch");
        assert_eq!(record.month_key(), "2024-03");
    }

    #[test]
    fn check_rejects_records_a_form_could_not_produce() {
        assert!(ExpenseRecord::new(date(2024, 6, 1), 0.01, "Food", "").check().is_ok());
        for amount in [-500.0, 0.0, f64::NAN, f64::INFINITY] {
            let record = ExpenseRecord::new(date(2024, 6, 1), amount, "Food", "");
            assert!(matches!(record.check(), Err(LedgerError::InvalidAmount(_))));
        }
        for category in ["", "  "] {
            let record = ExpenseRecord::new(date(2024, 6, 1), 5.0, category, "");
            assert!(matches!(record.check(), Err(LedgerError::InvalidCategory)));
        }
    }

    #[test]
    fn record_without_id_or_note_deserializes() {
        let json = r#"{"date":"2024-01-15","amount":10,"category":"Food"}"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, date(2024, 1, 15));
        assert_eq!(record.amount, 10.0);
        assert!(record.note.is_empty());
        assert!(!record.id.is_nil());
    }

    #[test]
    fn input_from_preset_record_selects_preset() {
        let record = ExpenseRecord::new(date(2024, 1, 1), 25.5, "Food", "");
        let input = ExpenseInput::from_record(&record, &default_categories());
        assert_eq!(input.category, "Food");
        assert!(input.custom_category.is_empty());
        assert_eq!(input.amount, "25.5");
    }

    #[test]
    fn input_from_custom_record_selects_sentinel() {
        let record = ExpenseRecord::new(date(2024, 1, 1), 3.0, "Pets", "treats");
        let input = ExpenseInput::from_record(&record, &default_categories());
        assert_eq!(input.category, CUSTOM_CATEGORY);
        assert_eq!(input.custom_category, "Pets");
        assert_eq!(input.note, "treats");
    }
}
