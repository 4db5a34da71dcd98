use async_trait::async_trait;

use crate::domain::shared::value_objects::{GeoPoint, Money, UserId};
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;

#[derive(Debug, Clone)]
pub struct IngestItem {
    pub name: String,
    /// Raw barcode type; an unknown value marks only this item as invalid.
    pub barcode_type: String,
    pub gtin: String,
    pub price: Money,
    pub currency: Option<String>,
    pub location: Option<GeoPoint>,
}

pub struct BatchIngestParams {
    pub owner: UserId,
    pub items: Vec<IngestItem>,
}

#[derive(Debug, Clone)]
pub enum IngestStatus {
    Created(StorePrice),
    /// The store already has a current listing for this product.
    Conflict,
    Invalid(String),
    /// Storage failed for this item; other items are unaffected.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub index: usize,
    pub status: IngestStatus,
}

/// Ingests every item independently; one bad item never undoes another.
/// The call itself fails only when the owner's store cannot be resolved.
#[async_trait]
pub trait BatchIngestUseCase: Send + Sync {
    async fn execute(
        &self,
        params: BatchIngestParams,
    ) -> Result<Vec<IngestOutcome>, StorePriceError>;
}
