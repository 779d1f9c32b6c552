//! Currency records and the formatter that renders amounts with them.

pub mod formatter;
pub mod lookup;
pub mod number;
pub mod record;
pub mod selector;

pub use formatter::{CurrencyFormatter, FormatOptions, FALLBACK_CURRENCY};
pub use lookup::{CurrencyLookup, NoLookup};
pub use number::{format_number, parse_amount};
pub use record::{CurrencyId, CurrencyRecord, MAX_DECIMALS};
pub use selector::Selector;
