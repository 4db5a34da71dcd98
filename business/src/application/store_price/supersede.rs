use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;
use crate::domain::store_price::repository::StorePriceRepository;
use crate::domain::store_price::use_cases::supersede::{
    SupersedeListingParams, SupersedeListingUseCase,
};

pub struct SupersedeListingUseCaseImpl {
    pub repository: Arc<dyn StorePriceRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SupersedeListingUseCase for SupersedeListingUseCaseImpl {
    async fn execute(
        &self,
        params: SupersedeListingParams,
    ) -> Result<StorePrice, StorePriceError> {
        let store = self
            .store_repository
            .find_by_owner(&params.owner)
            .await?
            .ok_or(StorePriceError::StoreNotFound)?;

        let current = self
            .repository
            .get_by_id(params.listing_id)
            .await
            .map_err(StorePriceError::from_write)?;

        if current.store_id != store.id {
            return Err(StorePriceError::NotFound);
        }

        let replacement = current.superseded_by(params.price, params.currency)?;

        self.repository
            .supersede(current.id, &replacement)
            .await
            .map_err(|e| match e {
                // Someone else retired the listing between our read and the swap.
                RepositoryError::NotFound => StorePriceError::NotCurrent,
                other => StorePriceError::from_write(other),
            })?;

        self.logger.info(&format!(
            "Listing {} superseded by {} at {} {}",
            current.id, replacement.id, replacement.price, replacement.currency
        ));
        Ok(replacement)
    }
}
