use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static GTIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,14}$").unwrap());

/// Symbology family declared for a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeType {
    Upc,
    Ean,
    Gtin8,
    Gtin12,
    Gtin13,
    Gtin14,
}

impl std::fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarcodeType::Upc => write!(f, "UPC"),
            BarcodeType::Ean => write!(f, "EAN"),
            BarcodeType::Gtin8 => write!(f, "GTIN-8"),
            BarcodeType::Gtin12 => write!(f, "GTIN-12"),
            BarcodeType::Gtin13 => write!(f, "GTIN-13"),
            BarcodeType::Gtin14 => write!(f, "GTIN-14"),
        }
    }
}

impl std::str::FromStr for BarcodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPC" => Ok(BarcodeType::Upc),
            "EAN" => Ok(BarcodeType::Ean),
            "GTIN-8" => Ok(BarcodeType::Gtin8),
            "GTIN-12" => Ok(BarcodeType::Gtin12),
            "GTIN-13" => Ok(BarcodeType::Gtin13),
            "GTIN-14" => Ok(BarcodeType::Gtin14),
            _ => Err(format!("Invalid barcode type: {}", s)),
        }
    }
}

/// Global Trade Item Number: 8 to 14 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gtin(String);

impl Gtin {
    pub fn parse(value: &str) -> Option<Self> {
        if GTIN_PATTERN.is_match(value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// Constructor for values already persisted in the repository (no validation).
    pub fn from_repository(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Gtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barcode {
    pub kind: BarcodeType,
    pub gtin: Gtin,
}
