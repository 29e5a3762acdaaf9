use std::{
    fs,
    path::{Path, PathBuf},
};

use super::KeyValueStore;
use crate::core::utils::{app_data_dir, data_dir_in, ensure_dir, write_atomic};
use crate::errors::{LedgerError, LedgerResult};

const VALUE_EXTENSION: &str = "json";

/// Filesystem-backed store keeping one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> LedgerResult<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Store under the default application directory.
    pub fn new_default() -> LedgerResult<Self> {
        Self::new(data_dir_in(&app_data_dir()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn value_path(&self, key: &str) -> LedgerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(LedgerError::Config(format!(
                "`{key}` cannot be used as a storage key"
            )));
        }
        Ok(self.root.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.value_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&self, key: &str, value: &str) -> LedgerResult<()> {
        let path = self.value_path(key)?;
        write_atomic(&path, value)?;
        tracing::debug!(key, path = %path.display(), "value persisted");
        Ok(())
    }
}
