#![doc(test(attr(deny(warnings))))]

//! Currency Format renders monetary amounts using per-currency decimal
//! counts, separators and symbols, with a configurable default currency.

pub mod config;
pub mod currency;
pub mod errors;
pub mod storage;
pub mod utils;

pub use config::{ConfigManager, FormatterConfig};
pub use currency::{CurrencyFormatter, CurrencyRecord, FormatOptions, Selector};
pub use errors::CurrencyError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Currency Format tracing initialized.");
    });
}
