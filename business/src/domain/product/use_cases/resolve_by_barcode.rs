use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ResolveProductByBarcodeParams {
    pub gtin: String,
}

#[async_trait]
pub trait ResolveProductByBarcodeUseCase: Send + Sync {
    async fn execute(&self, params: ResolveProductByBarcodeParams)
    -> Result<Product, ProductError>;
}
