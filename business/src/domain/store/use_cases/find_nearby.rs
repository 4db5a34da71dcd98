use async_trait::async_trait;

use crate::domain::shared::value_objects::GeoPoint;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::NearbyStore;

pub struct FindNearbyStoresParams {
    pub center: GeoPoint,
    /// Falls back to `DEFAULT_RADIUS_METERS` when absent.
    pub radius_meters: Option<i64>,
}

#[async_trait]
pub trait FindNearbyStoresUseCase: Send + Sync {
    async fn execute(&self, params: FindNearbyStoresParams)
    -> Result<Vec<NearbyStore>, StoreError>;
}
