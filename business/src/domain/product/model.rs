use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{Barcode, BarcodeType, Gtin};

/// Catalog entry identified by its GTIN.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub barcode: Barcode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub barcode_type: BarcodeType,
    pub gtin: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let gtin = Gtin::parse(&props.gtin).ok_or(ProductError::InvalidBarcode)?;

        let name = props.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            barcode: Barcode {
                kind: props.barcode_type,
                gtin,
            },
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        barcode: Barcode,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            barcode,
            created_at,
            updated_at,
        }
    }
}
