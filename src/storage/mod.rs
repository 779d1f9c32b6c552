pub mod json_backend;

use crate::{currency::CurrencyRecord, errors::CurrencyError};

pub type Result<T> = std::result::Result<T, CurrencyError>;

/// Source of currency records for bulk loading into a formatter.
pub trait CatalogSource: Send + Sync {
    fn load_records(&self) -> Result<Vec<CurrencyRecord>>;
}

impl CatalogSource for Vec<CurrencyRecord> {
    fn load_records(&self) -> Result<Vec<CurrencyRecord>> {
        Ok(self.clone())
    }
}

pub use json_backend::JsonCatalog;
