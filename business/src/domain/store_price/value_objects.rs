use serde::{Deserialize, Serialize};

/// Who reported a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    StoreBatch,
    Shopper,
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSource::StoreBatch => write!(f, "store_batch"),
            PriceSource::Shopper => write!(f, "shopper"),
        }
    }
}

impl std::str::FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store_batch" => Ok(PriceSource::StoreBatch),
            "shopper" => Ok(PriceSource::Shopper),
            _ => Err(format!("Invalid price source: {}", s)),
        }
    }
}

/// ISO 4217 style code: exactly three ASCII letters, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub const DEFAULT_CODE: &'static str = "EUR";

    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Constructor for values already persisted in the repository (no validation).
    pub fn from_repository(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(Self::DEFAULT_CODE.to_string())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_uppercase_currency_code() {
        assert_eq!(Currency::parse("eur").unwrap().as_str(), "EUR");
        assert_eq!(Currency::parse(" sek ").unwrap().as_str(), "SEK");
    }

    #[test]
    fn should_reject_malformed_currency_code() {
        assert!(Currency::parse("EURO").is_none());
        assert!(Currency::parse("E1R").is_none());
        assert!(Currency::parse("").is_none());
    }

    #[test]
    fn should_default_to_euro() {
        assert_eq!(Currency::default().as_str(), "EUR");
    }

    #[test]
    fn should_parse_price_source() {
        assert_eq!("store_batch".parse::<PriceSource>(), Ok(PriceSource::StoreBatch));
        assert_eq!(PriceSource::Shopper.to_string(), "shopper");
        assert!("admin".parse::<PriceSource>().is_err());
    }

    #[test]
    fn should_serialize_price_source_like_its_display() {
        for source in [PriceSource::StoreBatch, PriceSource::Shopper] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }
}
