use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Barcode, BarcodeType, Gtin};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub barcode_type: String,
    pub gtin: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            Barcode {
                kind: self
                    .barcode_type
                    .parse::<BarcodeType>()
                    .unwrap_or(BarcodeType::Ean),
                gtin: Gtin::from_repository(self.gtin),
            },
            self.created_at,
            self.updated_at,
        )
    }
}
