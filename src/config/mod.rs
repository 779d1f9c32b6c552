use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    currency::FALLBACK_CURRENCY,
    errors::CurrencyError,
    utils::{app_data_dir, persistence},
};

const CONFIG_FILE: &str = "config.json";

/// Settings used to build a [`CurrencyFormatter`](crate::currency::CurrencyFormatter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatterConfig {
    #[serde(default = "FormatterConfig::default_currency_value")]
    pub default_currency: String,
    /// JSON file holding the currency catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            default_currency: Self::default_currency_value(),
            catalog_path: None,
        }
    }
}

impl FormatterConfig {
    pub fn default_currency_value() -> String {
        FALLBACK_CURRENCY.into()
    }
}

/// Handles persistence for [`FormatterConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self::new(base.as_ref().join(CONFIG_FILE))
    }

    /// Manager for `config.json` inside the application data directory.
    pub fn default_location() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<FormatterConfig, CurrencyError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no formatter config on disk, using defaults");
            return Ok(FormatterConfig::default());
        }
        persistence::load_json(&self.path)
    }

    pub fn save(&self, config: &FormatterConfig) -> Result<(), CurrencyError> {
        persistence::save_json(config, &self.path)
    }
}
