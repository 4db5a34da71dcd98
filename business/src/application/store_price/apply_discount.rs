use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::model::StorePrice;
use crate::domain::store_price::repository::StorePriceRepository;
use crate::domain::store_price::use_cases::apply_discount::{
    ApplyDiscountParams, ApplyDiscountUseCase,
};

pub struct ApplyDiscountUseCaseImpl {
    pub repository: Arc<dyn StorePriceRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ApplyDiscountUseCase for ApplyDiscountUseCaseImpl {
    async fn execute(&self, params: ApplyDiscountParams) -> Result<StorePrice, StorePriceError> {
        self.logger.info(&format!(
            "Applying discount {} to listing {}",
            params.discounted_price, params.listing_id
        ));

        let store = self
            .store_repository
            .find_by_owner(&params.owner)
            .await?
            .ok_or(StorePriceError::StoreNotFound)?;

        let listing = self
            .repository
            .get_by_id(params.listing_id)
            .await
            .map_err(StorePriceError::from_write)?;

        // Listings of other stores are reported as missing.
        if listing.store_id != store.id {
            return Err(StorePriceError::NotFound);
        }
        if !listing.is_current {
            return Err(StorePriceError::NotCurrent);
        }

        let discounted = listing.with_discount(params.discounted_price)?;
        // The listing was current when read; zero rows now means it was retired since.
        self.repository
            .update_discount(&discounted)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => StorePriceError::NotCurrent,
                other => StorePriceError::from_write(other),
            })?;

        self.logger
            .info(&format!("Discount applied to listing {}", discounted.id));
        Ok(discounted)
    }
}
