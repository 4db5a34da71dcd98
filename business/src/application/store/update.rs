use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

pub struct UpdateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateStoreUseCase for UpdateStoreUseCaseImpl {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError> {
        self.logger
            .info(&format!("Updating store of owner: {}", params.owner));

        let existing = self
            .repository
            .find_by_owner(&params.owner)
            .await?
            .ok_or(StoreError::NotFound)?;

        let updated = existing.patched(params.patch)?;
        self.repository.save(&updated).await?;

        self.logger.info(&format!("Store updated: {}", updated.id));
        Ok(updated)
    }
}
