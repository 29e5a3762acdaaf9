//! Expense records, the ledger that orders them, and the pure rules applied to them.

pub mod budget;
pub mod category;
pub mod expense;
pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use budget::{check_budget, Budget, BudgetStatus};
pub use category::{default_categories, resolve_category, CUSTOM_CATEGORY, DEFAULT_CATEGORIES};
pub use expense::{validate_amount, ExpenseInput, ExpenseRecord};
pub use filter::{parse_date_bound, ExpenseFilter};
pub use ledger::{month_key, Ledger};
