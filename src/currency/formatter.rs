use std::{
    collections::HashMap,
    fmt,
    path::Path,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, warn};

use crate::{
    config::FormatterConfig,
    errors::CurrencyError,
    storage::{json_backend::JsonCatalog, CatalogSource},
};

use super::{
    lookup::{CurrencyLookup, NoLookup},
    number::{format_number, parse_amount, plain_number},
    record::CurrencyRecord,
    selector::Selector,
};

/// Currency used when nothing else has been configured.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Presentation switches for [`CurrencyFormatter::format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Drop the prefix and suffix, leaving only the number.
    pub hide_symbols: bool,
    /// Append a space and the currency code.
    pub show_code: bool,
}

impl FormatOptions {
    pub fn symbols_hidden() -> Self {
        Self {
            hide_symbols: true,
            show_code: false,
        }
    }

    pub fn with_code() -> Self {
        Self {
            hide_symbols: false,
            show_code: true,
        }
    }
}

/// Immutable view of the loaded catalog. Replaced wholesale on every load.
#[derive(Debug, Clone)]
struct Snapshot {
    currencies: HashMap<String, CurrencyRecord>,
    default_currency: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            currencies: HashMap::new(),
            default_currency: FALLBACK_CURRENCY.to_string(),
        }
    }
}

/// Formats amounts according to loaded currency records.
///
/// Lookups read a shared snapshot; [`load`](Self::load) builds a new one and
/// swaps it in, so concurrent callers see either the old or the new catalog.
pub struct CurrencyFormatter {
    snapshot: RwLock<Arc<Snapshot>>,
    lookup: Box<dyn CurrencyLookup>,
}

impl fmt::Debug for CurrencyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("CurrencyFormatter")
            .field("default_currency", &snapshot.default_currency)
            .field("currencies", &snapshot.currencies.len())
            .finish_non_exhaustive()
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyFormatter {
    /// Formatter without an id lookup; numeric selectors always degrade.
    pub fn new() -> Self {
        Self::with_lookup(NoLookup)
    }

    pub fn with_lookup(lookup: impl CurrencyLookup + 'static) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            lookup: Box::new(lookup),
        }
    }

    /// Builds a formatter from configuration. When a catalog path is set, its
    /// records are loaded and the catalog also serves id lookups.
    pub fn from_config(config: &FormatterConfig) -> Result<Self, CurrencyError> {
        match &config.catalog_path {
            Some(path) => Self::from_catalog(path, Some(config.default_currency.as_str())),
            None => {
                let formatter = Self::new();
                formatter.load(Vec::new(), Some(config.default_currency.as_str()))?;
                Ok(formatter)
            }
        }
    }

    pub fn from_catalog(path: &Path, default_code: Option<&str>) -> Result<Self, CurrencyError> {
        let catalog = JsonCatalog::open(path)?;
        let records = catalog.load_records()?;
        debug!(path = %catalog.path().display(), "building formatter from catalog");
        let formatter = Self::with_lookup(catalog);
        formatter.load(records, default_code)?;
        Ok(formatter)
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Merges `records` into the catalog, keyed by code.
    ///
    /// Later records win over earlier ones and over previously loaded ones;
    /// codes absent from `records` are kept. A non-blank `default_code`
    /// replaces the default currency. If any record is malformed nothing
    /// changes.
    pub fn load<I>(&self, records: I, default_code: Option<&str>) -> Result<(), CurrencyError>
    where
        I: IntoIterator<Item = CurrencyRecord>,
    {
        let records: Vec<CurrencyRecord> = records.into_iter().collect();
        for record in &records {
            record.validate()?;
        }

        let mut guard = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = Snapshot::clone(&**guard);
        let loaded = records.len();
        for record in records {
            next.currencies.insert(record.code.clone(), record);
        }
        if let Some(code) = default_code.map(str::trim).filter(|code| !code.is_empty()) {
            next.default_currency = code.to_string();
        }
        debug!(
            loaded,
            total = next.currencies.len(),
            default = %next.default_currency,
            "currency catalog loaded"
        );
        *guard = Arc::new(next);
        Ok(())
    }

    pub fn default_currency(&self) -> String {
        self.snapshot().default_currency.clone()
    }

    pub fn currency(&self, code: &str) -> Option<CurrencyRecord> {
        self.snapshot().currencies.get(code).cloned()
    }

    /// Loaded currency codes in sorted order.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.snapshot().currencies.keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.snapshot().currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Picks the record a selector refers to.
    ///
    /// Numeric selectors go to the id lookup only. Unknown codes and blank
    /// selectors fall back to the default currency.
    pub fn resolve(&self, selector: impl Into<Selector>) -> Option<CurrencyRecord> {
        match selector.into() {
            Selector::Id(id) => {
                let Some(record) = self.lookup.find(id) else {
                    warn!(%id, "currency id not found, leaving amount unformatted");
                    return None;
                };
                if let Err(err) = record.validate() {
                    warn!(%id, error = %err, "looked up currency is malformed");
                    return None;
                }
                Some(record)
            }
            Selector::UnmatchedId(raw) => {
                warn!(selector = %raw, "numeric selector is not a currency id");
                None
            }
            Selector::Code(code) => {
                let snapshot = self.snapshot();
                if let Some(record) = snapshot.currencies.get(&code) {
                    return Some(record.clone());
                }
                debug!(
                    %code,
                    default = %snapshot.default_currency,
                    "unknown currency code, using default"
                );
                Self::default_record(&snapshot)
            }
            Selector::Default => Self::default_record(&self.snapshot()),
        }
    }

    fn default_record(snapshot: &Snapshot) -> Option<CurrencyRecord> {
        let record = snapshot.currencies.get(&snapshot.default_currency).cloned();
        if record.is_none() {
            debug!(default = %snapshot.default_currency, "default currency is not loaded");
        }
        record
    }

    /// Formats `value` in the selected currency.
    ///
    /// `value` may already be formatted; it is stripped down to digits and
    /// dots before parsing. When no currency can be resolved the parsed
    /// number is returned without any formatting.
    pub fn format(
        &self,
        value: impl fmt::Display,
        selector: impl Into<Selector>,
        options: FormatOptions,
    ) -> String {
        let amount = parse_amount(&value.to_string());
        match self.resolve(selector) {
            Some(record) => render(amount, &record, options),
            None => plain_number(amount),
        }
    }

    pub fn format_with(
        &self,
        value: impl fmt::Display,
        selector: impl Into<Selector>,
        hide_symbols: bool,
        show_code: bool,
    ) -> String {
        self.format(
            value,
            selector,
            FormatOptions {
                hide_symbols,
                show_code,
            },
        )
    }
}

fn render(amount: f64, record: &CurrencyRecord, options: FormatOptions) -> String {
    let number = format_number(
        amount,
        record.decimals,
        &record.decimal_point,
        &record.thousand_separator,
    );
    let mut out = if options.hide_symbols {
        number
    } else {
        format!("{}{}{}", record.prefix, number, record.suffix)
    };
    if options.show_code {
        out.push(' ');
        out.push_str(&record.code);
    }
    out
}
