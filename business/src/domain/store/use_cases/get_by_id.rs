use async_trait::async_trait;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

pub struct GetStoreByIdParams {
    /// Raw identifier as received from the caller; validated by the use case.
    pub id: String,
}

#[async_trait]
pub trait GetStoreByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetStoreByIdParams) -> Result<Store, StoreError>;
}
