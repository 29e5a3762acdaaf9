use crate::errors::{LedgerError, LedgerResult};

/// Selection value that switches category input to free-form text.
pub const CUSTOM_CATEGORY: &str = "__custom__";

/// Categories offered before the user types a custom one.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Utilities",
    "Health",
    "Education",
    "Others",
];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}

/// Resolves the category selection into the value stored on a record.
///
/// `selected` is either a preset name or [`CUSTOM_CATEGORY`], in which case the
/// trimmed `custom_text` is used instead. Blank results are rejected.
pub fn resolve_category(selected: &str, custom_text: &str) -> LedgerResult<String> {
    let resolved = if selected == CUSTOM_CATEGORY {
        custom_text.trim()
    } else {
        selected.trim()
    };
    if resolved.is_empty() {
        return Err(LedgerError::InvalidCategory);
    }
    Ok(resolved.to_string())
}

pub fn is_preset(category: &str, presets: &[String]) -> bool {
    presets.iter().any(|preset| preset == category)
}
