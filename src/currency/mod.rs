//! Amount formatting for summaries handed to the presentation layer.

use crate::core::services::DashboardSummary;

/// Formats `amount` with two decimals behind `symbol`, e.g. `₹1234.50`.
/// Negative values keep the sign in front of the symbol.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// One-line totals banner: filtered total, this month's spend and, when a
/// budget is set, the limit with its status.
pub fn totals_line(summary: &DashboardSummary, symbol: &str) -> String {
    let mut line = format!(
        "Total Expenses: {} | This Month: {}",
        format_amount(symbol, summary.filtered_total),
        format_amount(symbol, summary.spent_this_month)
    );
    if let (Some(limit), Some(status)) = (summary.budget_limit, summary.budget_status) {
        line.push_str(&format!(
            " | Budget: {} ({})",
            format_amount(symbol, limit),
            status
        ));
    }
    line
}
