use std::fmt;

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use crate::errors::{LedgerError, LedgerResult};

/// Monthly spending ceiling. A zero limit means no budget is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    limit: f64,
}

impl Budget {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn monthly(limit: f64) -> LedgerResult<Self> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(LedgerError::InvalidBudget(format!(
                "{limit} is not a non-negative amount"
            )));
        }
        Ok(Self { limit })
    }

    /// Parses the budget field as typed by the user; blank clears the budget.
    pub fn parse(raw: &str) -> LedgerResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::unset());
        }
        let limit = trimmed
            .parse::<f64>()
            .map_err(|_| LedgerError::InvalidBudget(format!("`{trimmed}` is not a number")))?;
        Self::monthly(limit)
    }

    pub fn is_set(&self) -> bool {
        self.limit > 0.0
    }

    pub fn limit(&self) -> Option<f64> {
        self.is_set().then_some(self.limit)
    }

    /// Status of `spent` against this budget, or `None` when no budget is set.
    pub fn status(&self, spent: f64) -> Option<BudgetStatus> {
        self.limit().map(|limit| {
            if spent > limit {
                BudgetStatus::Exceeded
            } else {
                BudgetStatus::WithinLimit
            }
        })
    }

    /// Stored form: the limit as a decimal string, empty when unset.
    pub fn encode(&self) -> String {
        match self.limit() {
            Some(limit) => limit.to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    WithinLimit,
    Exceeded,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetStatus::WithinLimit => f.write_str("Within Limit"),
            BudgetStatus::Exceeded => f.write_str("Exceeded"),
        }
    }
}

/// Verifies that applying a pending add or edit keeps `target_month` within budget.
///
/// `previous_amount` is the edited record's current contribution to
/// `target_month` (zero for appends); it is removed before `new_amount` is
/// added so lowering an amount near the ceiling never fails.
pub fn check_budget(
    ledger: &Ledger,
    budget: &Budget,
    target_month: &str,
    previous_amount: f64,
    new_amount: f64,
) -> LedgerResult<()> {
    let Some(limit) = budget.limit() else {
        return Ok(());
    };
    let attempted = ledger.month_to_date_total(target_month) - previous_amount + new_amount;
    tracing::debug!(target_month, attempted, limit, "checking monthly budget");
    if attempted > limit {
        return Err(LedgerError::BudgetExceeded { attempted, limit });
    }
    Ok(())
}
