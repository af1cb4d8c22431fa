//! Currencies and usage-frequency presets for the investment calculator.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported display currencies.
///
/// The calculator does no exchange-rate conversion; the currency only
/// decides which symbol is put in front of formatted amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Inr,
}

impl Currency {
    /// All currencies for UI selection
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Jpy,
        Currency::Inr,
    ];

    /// ISO 4217 code (e.g., "USD")
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
            Currency::Jpy => "¥",
            Currency::Inr => "₹",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Jpy => "Japanese Yen",
            Currency::Inr => "Indian Rupee",
        }
    }

    /// Parse an ISO code, case-insensitively
    pub fn from_code(code: &str) -> CalcResult<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CalcError::unknown_option("currency", code))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Catalog entry describing a currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

impl From<Currency> for CurrencyInfo {
    fn from(c: Currency) -> Self {
        CurrencyInfo {
            code: c.code(),
            symbol: c.symbol(),
            name: c.display_name(),
        }
    }
}

/// A "uses per month" choice offered in the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageFrequency {
    pub uses_per_month: u32,
    pub label: &'static str,
}

pub const USAGE_FREQUENCIES: [UsageFrequency; 7] = [
    UsageFrequency { uses_per_month: 1, label: "1 time per month (12 times/year)" },
    UsageFrequency { uses_per_month: 2, label: "2 times per month (24 times/year)" },
    UsageFrequency { uses_per_month: 4, label: "4 times per month (48 times/year)" },
    UsageFrequency { uses_per_month: 8, label: "8 times per month (96 times/year)" },
    UsageFrequency { uses_per_month: 12, label: "12 times per month (144 times/year)" },
    UsageFrequency { uses_per_month: 20, label: "20 times per month (240 times/year)" },
    UsageFrequency { uses_per_month: 30, label: "30 times per month (360 times/year)" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::from_code("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_code("JPY").unwrap().symbol(), "¥");
        assert!(Currency::from_code("XYZ").is_err());
    }

    #[test]
    fn test_currency_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
        let c: Currency = serde_json::from_str("\"CAD\"").unwrap();
        assert_eq!(c.symbol(), "C$");
    }

    #[test]
    fn test_usage_labels_match_annual_uses() {
        for f in USAGE_FREQUENCIES {
            let annual = format!("({} times/year)", f.uses_per_month * 12);
            assert!(f.label.ends_with(&annual), "{}", f.label);
        }
    }
}
