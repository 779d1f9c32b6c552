use std::collections::HashMap;

use super::record::{CurrencyId, CurrencyRecord};

/// Resolves a currency by its numeric identifier.
///
/// Only consulted when a formatter is handed a numeric selector.
pub trait CurrencyLookup: Send + Sync {
    fn find(&self, id: CurrencyId) -> Option<CurrencyRecord>;
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl CurrencyLookup for NoLookup {
    fn find(&self, _id: CurrencyId) -> Option<CurrencyRecord> {
        None
    }
}

impl<F> CurrencyLookup for F
where
    F: Fn(CurrencyId) -> Option<CurrencyRecord> + Send + Sync,
{
    fn find(&self, id: CurrencyId) -> Option<CurrencyRecord> {
        self(id)
    }
}

impl CurrencyLookup for HashMap<CurrencyId, CurrencyRecord> {
    fn find(&self, id: CurrencyId) -> Option<CurrencyRecord> {
        self.get(&id).cloned()
    }
}

impl CurrencyLookup for Vec<CurrencyRecord> {
    fn find(&self, id: CurrencyId) -> Option<CurrencyRecord> {
        self.iter().find(|record| record.id == Some(id)).cloned()
    }
}
