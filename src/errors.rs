use thiserror::Error;

/// Error type that captures ledger validation, budget, and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Please enter a valid amount greater than 0 (got `{0}`)")]
    InvalidAmount(String),
    #[error("Please select or enter a category")]
    InvalidCategory,
    #[error("Monthly budget exceeded: {attempted:.2} would pass the limit of {limit:.2}")]
    BudgetExceeded { attempted: f64, limit: f64 },
    #[error("Malformed persisted data under `{key}`: {reason}")]
    MalformedPersistedData { key: String, reason: String },
    #[error("Index {index} is out of range for a ledger of {len} expenses")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    /// True for errors the user can fix by correcting input and retrying.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_)
                | LedgerError::InvalidCategory
                | LedgerError::BudgetExceeded { .. }
                | LedgerError::InvalidBudget(_)
                | LedgerError::InvalidDate(_)
        )
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
