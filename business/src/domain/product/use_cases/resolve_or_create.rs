use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::BarcodeType;

pub struct ResolveOrCreateProductParams {
    pub name: String,
    pub barcode_type: BarcodeType,
    pub gtin: String,
}

/// Returns the product registered under `gtin`, creating it on first sighting.
#[async_trait]
pub trait ResolveOrCreateProductUseCase: Send + Sync {
    async fn execute(&self, params: ResolveOrCreateProductParams)
    -> Result<Product, ProductError>;
}
