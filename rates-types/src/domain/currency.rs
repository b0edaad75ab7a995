//! Validated currency code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// An ISO-4217-style currency code: exactly three ASCII letters,
/// normalised to uppercase.
///
/// The source/target pair is configuration, not a closed set, so this is
/// a validated newtype rather than an enum of supported currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Parses and validates a currency code.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrency(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let c = "xof".parse::<Currency>().unwrap();
        assert_eq!(c.as_str(), "XOF");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let c = " CAD ".parse::<Currency>().unwrap();
        assert_eq!(c.as_str(), "CAD");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            "CADX".parse::<Currency>(),
            Err(DomainError::InvalidCurrency(_))
        ));
        assert!(matches!(
            "CA".parse::<Currency>(),
            Err(DomainError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert!(matches!(
            "C4D".parse::<Currency>(),
            Err(DomainError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_display() {
        let c = Currency::new("eur").unwrap();
        assert_eq!(c.to_string(), "EUR");
    }
}
