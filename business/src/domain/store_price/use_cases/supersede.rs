use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::{Money, UserId};
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;

pub struct SupersedeListingParams {
    pub listing_id: Uuid,
    pub owner: UserId,
    pub price: Money,
    pub currency: Option<String>,
}

/// Replaces the current listing with a new price in a single transaction,
/// keeping the old row as history.
#[async_trait]
pub trait SupersedeListingUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SupersedeListingParams,
    ) -> Result<StorePrice, StorePriceError>;
}
