use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{app_data_dir, config_file_in, data_dir_in, ensure_dir, write_atomic};
use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::default_categories;
use crate::storage::JsonFileStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix used when formatting amounts.
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    /// Preset categories offered before falling back to custom text.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Overrides where expense data is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            categories: default_categories(),
            data_dir: None,
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn validate(&self) -> LedgerResult<()> {
        if self.categories.iter().any(|name| name.trim().is_empty()) {
            return Err(LedgerError::Config(
                "preset categories must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Opens the key-value store this configuration points at.
    pub fn open_store(&self) -> LedgerResult<JsonFileStore> {
        match &self.data_dir {
            Some(dir) => JsonFileStore::new(dir.clone()),
            None => JsonFileStore::new_default(),
        }
    }
}

/// Loads and saves [`Config`] as pretty JSON under the application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
    base: PathBuf,
}

impl ConfigManager {
    pub fn new() -> LedgerResult<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> LedgerResult<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            base,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default data directory for this base, used when the config names none.
    pub fn default_data_dir(&self) -> PathBuf {
        data_dir_in(&self.base)
    }

    pub fn load(&self) -> LedgerResult<Config> {
        if !self.path.exists() {
            return Ok(Config {
                data_dir: Some(self.default_data_dir()),
                ..Config::default()
            });
        }
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        if config.data_dir.is_none() {
            config.data_dir = Some(self.default_data_dir());
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> LedgerResult<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}
