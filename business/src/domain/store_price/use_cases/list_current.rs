use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::PricedListing;

pub struct ListCurrentPricesParams {
    pub product_id: Uuid,
    pub store_ids: Vec<Uuid>,
}

#[async_trait]
pub trait ListCurrentPricesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListCurrentPricesParams,
    ) -> Result<Vec<PricedListing>, StorePriceError>;
}
