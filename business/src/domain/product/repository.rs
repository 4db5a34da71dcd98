use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::Gtin;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_gtin(&self, gtin: &Gtin) -> Result<Option<Product>, RepositoryError>;

    /// Inserts `product` unless a product with the same GTIN already exists, then
    /// returns whichever row is stored. Concurrent callers converge on one product.
    async fn insert_if_absent(&self, product: &Product) -> Result<Product, RepositoryError>;
}
