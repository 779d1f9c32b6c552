use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CurrencyError;

/// Largest number of fractional digits a record may ask for.
pub const MAX_DECIMALS: u8 = 18;

/// Numeric identifier of a persisted currency, distinct from its code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CurrencyId(pub u64);

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CurrencyId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// How a value is rendered in a given currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CurrencyId>,
    pub code: String,
    pub decimals: u8,
    pub decimal_point: String,
    #[serde(default)]
    pub thousand_separator: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl CurrencyRecord {
    /// Creates a record using `.` for decimals, `,` for grouping and no symbols.
    pub fn new(code: impl Into<String>, decimals: u8) -> Self {
        Self {
            id: None,
            code: code.into(),
            decimals,
            decimal_point: ".".into(),
            thousand_separator: ",".into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(CurrencyId::from(id));
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_separators(
        mut self,
        decimal_point: impl Into<String>,
        thousand_separator: impl Into<String>,
    ) -> Self {
        self.decimal_point = decimal_point.into();
        self.thousand_separator = thousand_separator.into();
        self
    }

    /// Checks that the record can be used for rendering.
    pub fn validate(&self) -> Result<(), CurrencyError> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(CurrencyError::invalid(&self.code, "code is empty"));
        }
        if self.code.chars().any(char::is_whitespace) {
            return Err(CurrencyError::invalid(&self.code, "code contains whitespace"));
        }
        if self.decimal_point.chars().count() != 1 {
            return Err(CurrencyError::invalid(
                &self.code,
                format!(
                    "decimal point must be a single character, got {:?}",
                    self.decimal_point
                ),
            ));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(CurrencyError::invalid(
                &self.code,
                format!("{} decimals exceeds the maximum of {}", self.decimals, MAX_DECIMALS),
            ));
        }
        if self.decimal_point == self.thousand_separator {
            return Err(CurrencyError::invalid(
                &self.code,
                "decimal point and thousand separator are identical",
            ));
        }
        Ok(())
    }
}
