use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::get_by_id::{GetStoreByIdParams, GetStoreByIdUseCase};

pub struct GetStoreByIdUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStoreByIdUseCase for GetStoreByIdUseCaseImpl {
    async fn execute(&self, params: GetStoreByIdParams) -> Result<Store, StoreError> {
        let id = Uuid::parse_str(&params.id).map_err(|_| StoreError::InvalidId)?;

        self.logger.debug(&format!("Fetching store: {}", id));

        self.repository.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => StoreError::NotFound,
            other => StoreError::Repository(other),
        })
    }
}
