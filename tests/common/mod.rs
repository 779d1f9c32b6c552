#![allow(dead_code)]

use currency_format::{CurrencyFormatter, CurrencyRecord};

pub fn usd() -> CurrencyRecord {
    CurrencyRecord::new("USD", 2).with_id(1).with_prefix("$")
}

pub fn gbp() -> CurrencyRecord {
    CurrencyRecord::new("GBP", 2).with_id(2).with_prefix("£")
}

pub fn eur() -> CurrencyRecord {
    CurrencyRecord::new("EUR", 2)
        .with_id(3)
        .with_separators(",", ".")
        .with_suffix(" €")
}

pub fn jpy() -> CurrencyRecord {
    CurrencyRecord::new("JPY", 0).with_id(4).with_prefix("¥")
}

pub fn kwd() -> CurrencyRecord {
    CurrencyRecord::new("KWD", 3).with_id(5).with_suffix(" KD")
}

pub fn catalog() -> Vec<CurrencyRecord> {
    vec![usd(), gbp(), eur(), jpy(), kwd()]
}

/// Formatter loaded with the standard catalog and the built-in default.
pub fn loaded_formatter() -> CurrencyFormatter {
    let formatter = CurrencyFormatter::new();
    formatter.load(catalog(), None).expect("load catalog");
    formatter
}
