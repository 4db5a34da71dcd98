use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Barcode, BarcodeType};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum BarcodeTypeDto {
    #[oai(rename = "UPC")]
    Upc,
    #[oai(rename = "EAN")]
    Ean,
    #[oai(rename = "GTIN-8")]
    Gtin8,
    #[oai(rename = "GTIN-12")]
    Gtin12,
    #[oai(rename = "GTIN-13")]
    Gtin13,
    #[oai(rename = "GTIN-14")]
    Gtin14,
}

impl From<BarcodeType> for BarcodeTypeDto {
    fn from(kind: BarcodeType) -> Self {
        match kind {
            BarcodeType::Upc => BarcodeTypeDto::Upc,
            BarcodeType::Ean => BarcodeTypeDto::Ean,
            BarcodeType::Gtin8 => BarcodeTypeDto::Gtin8,
            BarcodeType::Gtin12 => BarcodeTypeDto::Gtin12,
            BarcodeType::Gtin13 => BarcodeTypeDto::Gtin13,
            BarcodeType::Gtin14 => BarcodeTypeDto::Gtin14,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BarcodeResponse {
    /// Barcode symbology
    #[oai(rename = "type")]
    pub kind: BarcodeTypeDto,
    /// 8 to 14 digit GTIN
    pub gtin: String,
}

impl From<Barcode> for BarcodeResponse {
    fn from(barcode: Barcode) -> Self {
        Self {
            kind: barcode.kind.into(),
            gtin: barcode.gtin.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub barcode: BarcodeResponse,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            barcode: product.barcode.into(),
        }
    }
}
