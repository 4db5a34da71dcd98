use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{Store, StorePatch};

/// The store to update is found through `owner`; callers cannot address a
/// store by id here.
pub struct UpdateStoreParams {
    pub owner: UserId,
    pub patch: StorePatch,
}

#[async_trait]
pub trait UpdateStoreUseCase: Send + Sync {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError>;
}
