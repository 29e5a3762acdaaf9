use std::sync::Mutex;

use chrono::NaiveDate;
use expense_ledger::{storage::JsonFileStore, ExpenseTracker};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique data directory for one test.
#[allow(dead_code)]
pub fn temp_data_dir() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

#[allow(dead_code)]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Opens a file-backed tracker in `dir` whose clock is pinned to `today`.
#[allow(dead_code)]
pub fn open_tracker(dir: &std::path::Path, today: NaiveDate) -> ExpenseTracker {
    let store = JsonFileStore::new(dir.to_path_buf()).expect("create json store");
    ExpenseTracker::open(Box::new(store))
        .expect("open tracker")
        .with_clock(move || today)
}
