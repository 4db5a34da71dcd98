use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::{GeoPoint, Money};
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;
use crate::domain::store_price::value_objects::PriceSource;

pub struct AddListingParams {
    pub store_id: Uuid,
    pub product_id: Uuid,
    pub price: Money,
    pub currency: Option<String>,
    pub location: Option<GeoPoint>,
    pub source: PriceSource,
}

/// Creates a new current listing. Not an upsert: an existing current listing
/// for the same pair yields `StorePriceError::Conflict`.
#[async_trait]
pub trait AddListingUseCase: Send + Sync {
    async fn execute(&self, params: AddListingParams) -> Result<StorePrice, StorePriceError>;
}
