use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::ledger::{month_key, Budget, BudgetStatus, ExpenseFilter, ExpenseRecord, Ledger};

/// A visible row: the record plus its position in the full ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    pub index: usize,
    pub record: ExpenseRecord,
}

/// Everything the presentation layer needs to draw the table, totals, and charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub rows: Vec<ExpenseRow>,
    pub filtered_total: f64,
    pub current_month: String,
    pub spent_this_month: f64,
    pub budget_limit: Option<f64>,
    pub budget_status: Option<BudgetStatus>,
    pub category_totals: Vec<(String, f64)>,
    pub monthly_totals: BTreeMap<String, f64>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn spent_in_month_of(ledger: &Ledger, reference: NaiveDate) -> f64 {
        ledger.month_to_date_total(&month_key(reference))
    }

    /// Builds the dashboard for `filter`. Month-to-date spend and budget status
    /// always use the whole ledger; rows, totals, and charts use the filtered view.
    pub fn dashboard(
        ledger: &Ledger,
        budget: &Budget,
        filter: &ExpenseFilter,
        reference: NaiveDate,
    ) -> DashboardSummary {
        let rows: Vec<ExpenseRow> = filter
            .matching_indices(ledger)
            .into_iter()
            .filter_map(|index| {
                ledger.get(index).map(|record| ExpenseRow {
                    index,
                    record: record.clone(),
                })
            })
            .collect();
        let view = Ledger::from_records(rows.iter().map(|row| row.record.clone()).collect());

        let current_month = month_key(reference);
        let spent_this_month = ledger.month_to_date_total(&current_month);

        DashboardSummary {
            filtered_total: view.total(),
            category_totals: view.category_totals(),
            monthly_totals: view.monthly_totals(),
            rows,
            current_month,
            spent_this_month,
            budget_limit: budget.limit(),
            budget_status: budget.status(spent_this_month),
        }
    }
}
