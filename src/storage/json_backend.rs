use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    currency::{CurrencyId, CurrencyLookup, CurrencyRecord},
    utils::persistence,
};

use super::{CatalogSource, Result};

/// Currency catalog stored as a JSON array of records.
///
/// The file is read once on [`open`](Self::open); the catalog then serves
/// both bulk loads and lookups by id.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
    records: Vec<CurrencyRecord>,
}

impl JsonCatalog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records: Vec<CurrencyRecord> = persistence::load_json(&path)?;
        debug!(path = %path.display(), count = records.len(), "currency catalog read");
        Ok(Self { path, records })
    }

    /// Writes `records` to `path`, replacing any existing catalog.
    pub fn save(path: impl Into<PathBuf>, records: Vec<CurrencyRecord>) -> Result<Self> {
        let path = path.into();
        persistence::save_json(&records, &path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }
}

impl CatalogSource for JsonCatalog {
    fn load_records(&self) -> Result<Vec<CurrencyRecord>> {
        Ok(self.records.clone())
    }
}

impl CurrencyLookup for JsonCatalog {
    fn find(&self, id: CurrencyId) -> Option<CurrencyRecord> {
        self.records
            .iter()
            .find(|record| record.id == Some(id))
            .cloned()
    }
}
