use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{DEFAULT_RADIUS_METERS, NearbyStore};
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::find_nearby::{
    FindNearbyStoresParams, FindNearbyStoresUseCase,
};

pub struct FindNearbyStoresUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindNearbyStoresUseCase for FindNearbyStoresUseCaseImpl {
    async fn execute(
        &self,
        params: FindNearbyStoresParams,
    ) -> Result<Vec<NearbyStore>, StoreError> {
        let radius = params.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);
        if radius <= 0 {
            return Err(StoreError::InvalidRadius);
        }

        let stores = self
            .repository
            .find_within_radius(params.center, radius)
            .await?;

        self.logger.debug(&format!(
            "Found {} stores within {} m of [{}, {}]",
            stores.len(),
            radius,
            params.center.lon(),
            params.center.lat()
        ));
        Ok(stores)
    }
}
