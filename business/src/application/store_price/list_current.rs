use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::PricedListing;
use crate::domain::store_price::repository::StorePriceRepository;
use crate::domain::store_price::use_cases::list_current::{
    ListCurrentPricesParams, ListCurrentPricesUseCase,
};

pub struct ListCurrentPricesUseCaseImpl {
    pub repository: Arc<dyn StorePriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCurrentPricesUseCase for ListCurrentPricesUseCaseImpl {
    async fn execute(
        &self,
        params: ListCurrentPricesParams,
    ) -> Result<Vec<PricedListing>, StorePriceError> {
        if params.store_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut listings = self
            .repository
            .list_current_for_stores(params.product_id, &params.store_ids)
            .await?;
        listings.retain(|e| e.listing.is_current);
        listings.sort_by_key(|e| e.listing.price);

        self.logger.debug(&format!(
            "Found {} current listings for product {} across {} stores",
            listings.len(),
            params.product_id,
            params.store_ids.len()
        ));
        Ok(listings)
    }
}
