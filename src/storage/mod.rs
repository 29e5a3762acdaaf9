//! Key-value persistence for the ledger and budget.
//!
//! The store only moves opaque strings; encoding lives here so every backend
//! shares the same recovery rules for damaged data.

pub mod json_file;
pub mod memory;

use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::{Budget, Ledger};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub const EXPENSES_KEY: &str = "expenses";
pub const BUDGET_KEY: &str = "budget";

/// Blocking string store addressed by key. Each `save` either fully replaces
/// the value or leaves the previous one in place.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> LedgerResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> LedgerResult<()>;
}

pub fn encode_ledger(ledger: &Ledger) -> LedgerResult<String> {
    Ok(serde_json::to_string(ledger)?)
}

/// Parses a stored ledger, falling back to an empty one when the blob is damaged.
pub fn decode_ledger(raw: Option<&str>) -> Ledger {
    let Some(raw) = raw else {
        return Ledger::new();
    };
    match parse_ledger(raw) {
        Ok(ledger) => ledger,
        Err(reason) => {
            let error = LedgerError::MalformedPersistedData {
                key: EXPENSES_KEY.to_string(),
                reason,
            };
            tracing::warn!(%error, "discarding stored expenses");
            Ledger::new()
        }
    }
}

fn parse_ledger(raw: &str) -> Result<Ledger, String> {
    let ledger = serde_json::from_str::<Ledger>(raw).map_err(|err| err.to_string())?;
    for (index, record) in ledger.records().iter().enumerate() {
        record
            .check()
            .map_err(|err| format!("record {index}: {err}"))?;
    }
    Ok(ledger)
}

/// Parses a stored budget; unreadable values disable the budget.
pub fn decode_budget(raw: Option<&str>) -> Budget {
    let Some(raw) = raw else {
        return Budget::unset();
    };
    match Budget::parse(raw) {
        Ok(budget) => budget,
        Err(err) => {
            let error = LedgerError::MalformedPersistedData {
                key: BUDGET_KEY.to_string(),
                reason: err.to_string(),
            };
            tracing::warn!(%error, "ignoring stored budget");
            Budget::unset()
        }
    }
}

pub fn load_ledger(store: &dyn KeyValueStore) -> LedgerResult<Ledger> {
    let raw = store.load(EXPENSES_KEY)?;
    Ok(decode_ledger(raw.as_deref()))
}

pub fn save_ledger(store: &dyn KeyValueStore, ledger: &Ledger) -> LedgerResult<()> {
    store.save(EXPENSES_KEY, &encode_ledger(ledger)?)
}

pub fn load_budget(store: &dyn KeyValueStore) -> LedgerResult<Budget> {
    let raw = store.load(BUDGET_KEY)?;
    Ok(decode_budget(raw.as_deref()))
}

pub fn save_budget(store: &dyn KeyValueStore, budget: &Budget) -> LedgerResult<()> {
    store.save(BUDGET_KEY, &budget.encode())
}
