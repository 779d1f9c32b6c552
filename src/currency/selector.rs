use super::record::CurrencyId;

/// Identifies which currency a value should be rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Use the formatter's default currency.
    #[default]
    Default,
    /// Resolve through the injected id lookup.
    Id(CurrencyId),
    /// Look the code up in the loaded catalog.
    Code(String),
    /// A numeric selector that cannot name any currency id (signed,
    /// fractional, exponent or overflowing). Resolves to nothing.
    UnmatchedId(String),
}

impl Selector {
    pub fn code(code: impl Into<String>) -> Self {
        Self::from(code.into())
    }
}

fn looks_numeric(raw: &str) -> bool {
    raw.chars().any(|ch| ch.is_ascii_digit())
        && raw
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        && raw.parse::<f64>().is_ok()
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Default;
        }
        if !looks_numeric(trimmed) {
            return Self::Code(raw.to_string());
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u64>() {
                return Self::Id(CurrencyId(id));
            }
        }
        Self::UnmatchedId(trimmed.to_string())
    }
}

impl From<&String> for Selector {
    fn from(raw: &String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<CurrencyId> for Selector {
    fn from(id: CurrencyId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for Selector {
    fn from(id: u64) -> Self {
        Self::Id(id.into())
    }
}

impl From<u32> for Selector {
    fn from(id: u32) -> Self {
        Self::Id(CurrencyId(u64::from(id)))
    }
}

impl<T: Into<Selector>> From<Option<T>> for Selector {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
