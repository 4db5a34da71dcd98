use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::{NewStorePriceProps, StorePrice};
use crate::domain::store_price::repository::StorePriceRepository;
use crate::domain::store_price::use_cases::add_listing::{AddListingParams, AddListingUseCase};

pub struct AddListingUseCaseImpl {
    pub repository: Arc<dyn StorePriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddListingUseCase for AddListingUseCaseImpl {
    async fn execute(&self, params: AddListingParams) -> Result<StorePrice, StorePriceError> {
        let listing = StorePrice::new(NewStorePriceProps {
            store_id: params.store_id,
            product_id: params.product_id,
            price: params.price,
            currency: params.currency,
            location: params.location,
            source: params.source,
        })?;

        if self
            .repository
            .find_current(listing.store_id, listing.product_id)
            .await?
            .is_some()
        {
            self.logger.warn(&format!(
                "Store {} already lists product {}",
                listing.store_id, listing.product_id
            ));
            return Err(StorePriceError::Conflict);
        }

        // A concurrent insert that slipped past the check above is rejected by
        // the partial unique index and comes back as Conflict.
        self.repository
            .insert(&listing)
            .await
            .map_err(StorePriceError::from_write)?;

        self.logger.info(&format!(
            "Listing {} created: store {} product {} at {} {}",
            listing.id, listing.store_id, listing.product_id, listing.price, listing.currency
        ));
        Ok(listing)
    }
}
