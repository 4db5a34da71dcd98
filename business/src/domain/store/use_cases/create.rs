use async_trait::async_trait;

use crate::domain::shared::value_objects::{GeoPoint, UserId};
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

pub struct CreateStoreParams {
    pub owner: UserId,
    pub name: String,
    pub location: GeoPoint,
}

#[async_trait]
pub trait CreateStoreUseCase: Send + Sync {
    async fn execute(&self, params: CreateStoreParams) -> Result<Store, StoreError>;
}
