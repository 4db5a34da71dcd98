use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{NewStoreProps, Store};
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};

pub struct CreateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateStoreUseCase for CreateStoreUseCaseImpl {
    async fn execute(&self, params: CreateStoreParams) -> Result<Store, StoreError> {
        let store = Store::new(NewStoreProps {
            name: params.name,
            location: params.location,
            owner: params.owner,
        })?;

        if self.repository.find_by_owner(&store.owner).await?.is_some() {
            return Err(StoreError::AlreadyOwned);
        }

        // The unique owner index settles concurrent registrations.
        self.repository.save(&store).await.map_err(|e| match e {
            RepositoryError::Duplicated => StoreError::AlreadyOwned,
            other => StoreError::Repository(other),
        })?;

        self.logger
            .info(&format!("Store created: {} for owner {}", store.id, store.owner));
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{GeoPoint, UserId};
    use crate::domain::store::model::NearbyStore;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub StoreRepo {}

        #[async_trait]
        impl StoreRepository for StoreRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError>;
            async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Store>, RepositoryError>;
            async fn find_within_radius(&self, center: GeoPoint, radius_meters: i64) -> Result<Vec<NearbyStore>, RepositoryError>;
            async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> CreateStoreParams {
        CreateStoreParams {
            owner: UserId::new("owner-1"),
            name: "Corner Market".to_string(),
            location: GeoPoint::new(24.94, 60.17).unwrap(),
        }
    }

    #[tokio::test]
    async fn should_create_store_for_owner_without_one() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo.expect_find_by_owner().returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let store = use_case.execute(params()).await.unwrap();

        assert_eq!(store.name, "Corner Market");
        assert_eq!(store.owner, UserId::new("owner-1"));
    }

    #[tokio::test]
    async fn should_reject_second_store_for_same_owner() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo.expect_find_by_owner().returning(|owner| {
            Ok(Some(
                Store::new(NewStoreProps {
                    name: "Existing".to_string(),
                    location: GeoPoint::new(0.0, 0.0).unwrap(),
                    owner: owner.clone(),
                })
                .unwrap(),
            ))
        });
        mock_repo.expect_save().never();

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), StoreError::AlreadyOwned));
    }

    #[tokio::test]
    async fn should_map_racing_owner_insert_to_already_owned() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo.expect_find_by_owner().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), StoreError::AlreadyOwned));
    }
}
