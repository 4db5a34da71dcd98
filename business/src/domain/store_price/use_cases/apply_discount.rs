use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::{Money, UserId};
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;

pub struct ApplyDiscountParams {
    pub listing_id: Uuid,
    pub owner: UserId,
    pub discounted_price: Money,
}

#[async_trait]
pub trait ApplyDiscountUseCase: Send + Sync {
    async fn execute(&self, params: ApplyDiscountParams) -> Result<StorePrice, StorePriceError>;
}
