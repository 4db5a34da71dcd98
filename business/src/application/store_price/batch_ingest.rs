use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::resolve_or_create::{
    ResolveOrCreateProductParams, ResolveOrCreateProductUseCase,
};
use crate::domain::product::value_objects::BarcodeType;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store_price::errors::StorePriceError;
use crate::domain::store_price::use_cases::add_listing::{AddListingParams, AddListingUseCase};
use crate::domain::store_price::use_cases::batch_ingest::{
    BatchIngestParams, BatchIngestUseCase, IngestItem, IngestOutcome, IngestStatus,
};
use crate::domain::store_price::value_objects::PriceSource;

pub struct BatchIngestUseCaseImpl {
    pub store_repository: Arc<dyn StoreRepository>,
    pub resolve_product: Arc<dyn ResolveOrCreateProductUseCase>,
    pub add_listing: Arc<dyn AddListingUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl BatchIngestUseCaseImpl {
    async fn ingest(&self, store: &Store, item: IngestItem) -> IngestStatus {
        let barcode_type: BarcodeType = match item.barcode_type.parse() {
            Ok(kind) => kind,
            Err(_) => return IngestStatus::Invalid("product.invalid_barcode_type".to_string()),
        };

        let product = match self
            .resolve_product
            .execute(ResolveOrCreateProductParams {
                name: item.name,
                barcode_type,
                gtin: item.gtin,
            })
            .await
        {
            Ok(product) => product,
            Err(e @ ProductError::Repository(_)) => return IngestStatus::Failed(e.to_string()),
            Err(e) => return IngestStatus::Invalid(e.to_string()),
        };

        let result = self
            .add_listing
            .execute(AddListingParams {
                store_id: store.id,
                product_id: product.id,
                price: item.price,
                currency: item.currency,
                location: item.location.or(Some(store.location)),
                source: PriceSource::StoreBatch,
            })
            .await;

        match result {
            Ok(listing) => IngestStatus::Created(listing),
            Err(StorePriceError::Conflict) => IngestStatus::Conflict,
            Err(e @ StorePriceError::Repository(_)) => IngestStatus::Failed(e.to_string()),
            Err(e) => IngestStatus::Invalid(e.to_string()),
        }
    }
}

#[async_trait]
impl BatchIngestUseCase for BatchIngestUseCaseImpl {
    async fn execute(
        &self,
        params: BatchIngestParams,
    ) -> Result<Vec<IngestOutcome>, StorePriceError> {
        let store = self
            .store_repository
            .find_by_owner(&params.owner)
            .await?
            .ok_or(StorePriceError::StoreNotFound)?;

        self.logger.info(&format!(
            "Ingesting {} items for store {}",
            params.items.len(),
            store.id
        ));

        let mut outcomes = Vec::with_capacity(params.items.len());
        for (index, item) in params.items.into_iter().enumerate() {
            let status = self.ingest(&store, item).await;
            match &status {
                IngestStatus::Failed(reason) => self
                    .logger
                    .error(&format!("Item {} of batch for store {} failed: {}", index, store.id, reason)),
                IngestStatus::Invalid(reason) => self
                    .logger
                    .warn(&format!("Item {} rejected: {}", index, reason)),
                _ => {}
            }
            outcomes.push(IngestOutcome { index, status });
        }

        let created = outcomes
            .iter()
            .filter(|o| matches!(o.status, IngestStatus::Created(_)))
            .count();
        self.logger.info(&format!(
            "Batch for store {} done: {} of {} created",
            store.id,
            created,
            outcomes.len()
        ));
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::{GeoPoint, Money, UserId};
    use crate::domain::store::model::NearbyStore;
    use crate::domain::store_price::model::{NewStorePriceProps, StorePrice};
    use chrono::Utc;
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
        pub ResolveProduct {}

        #[async_trait]
        impl ResolveOrCreateProductUseCase for ResolveProduct {
            async fn execute(&self, params: ResolveOrCreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub AddListing {}

        #[async_trait]
        impl AddListingUseCase for AddListing {
            async fn execute(&self, params: AddListingParams) -> Result<StorePrice, StorePriceError>;
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

    fn store_repo_owning(store_id: Uuid) -> MockStoreRepo {
        let mut store_repo = MockStoreRepo::new();
        store_repo.expect_find_by_owner().returning(move |owner| {
            Ok(Some(Store::from_repository(
                store_id,
                "A".to_string(),
                GeoPoint::from_repository(24.94, 60.17),
                owner.clone(),
                Utc::now(),
                Utc::now(),
            )))
        });
        store_repo
    }

    fn item(name: &str, barcode_type: &str, gtin: &str, price: i64) -> IngestItem {
        IngestItem {
            name: name.to_string(),
            barcode_type: barcode_type.to_string(),
            gtin: gtin.to_string(),
            price: Money::from_minor(price),
            currency: None,
            location: None,
        }
    }

    fn resolver_by_gtin() -> MockResolveProduct {
        let mut resolver = MockResolveProduct::new();
        resolver.expect_execute().returning(|params| {
            Product::new(NewProductProps {
                name: params.name,
                barcode_type: params.barcode_type,
                gtin: params.gtin,
            })
        });
        resolver
    }

    #[tokio::test]
    async fn should_report_each_item_independently() {
        let store_id = Uuid::new_v4();

        let mut add_listing = MockAddListing::new();
        add_listing.expect_execute().returning(|params| {
            // Second price for 99999999 collides with the one already listed.
            if params.price == Money::from_minor(250) {
                return Err(StorePriceError::Conflict);
            }
            StorePrice::new(NewStorePriceProps {
                store_id: params.store_id,
                product_id: params.product_id,
                price: params.price,
                currency: params.currency,
                location: params.location,
                source: params.source,
            })
        });

        let use_case = BatchIngestUseCaseImpl {
            store_repository: Arc::new(store_repo_owning(store_id)),
            resolve_product: Arc::new(resolver_by_gtin()),
            add_listing: Arc::new(add_listing),
            logger: mock_logger(),
        };

        let outcomes = use_case
            .execute(BatchIngestParams {
                owner: UserId::new("owner-a"),
                items: vec![
                    item("Coffee", "EAN", "1234567890128", 399),
                    item("Tea", "QR", "12345678", 150),
                    item("Milk", "GTIN-8", "99999999", 250),
                    item("Bread", "EAN", "12ab", 300),
                ],
            })
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 4);
        assert!(matches!(&outcomes[0].status, IngestStatus::Created(l) if l.store_id == store_id));
        assert!(matches!(&outcomes[1].status, IngestStatus::Invalid(r) if r == "product.invalid_barcode_type"));
        assert!(matches!(outcomes[2].status, IngestStatus::Conflict));
        assert!(matches!(&outcomes[3].status, IngestStatus::Invalid(r) if r == "product.invalid_barcode"));
        let indexes: Vec<_> = outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn should_fall_back_to_store_location_and_batch_source() {
        let store_id = Uuid::new_v4();

        let mut add_listing = MockAddListing::new();
        add_listing
            .expect_execute()
            .withf(|params| {
                params.source == PriceSource::StoreBatch
                    && params.location == Some(GeoPoint::from_repository(24.94, 60.17))
            })
            .times(1)
            .returning(|params| {
                StorePrice::new(NewStorePriceProps {
                    store_id: params.store_id,
                    product_id: params.product_id,
                    price: params.price,
                    currency: params.currency,
                    location: params.location,
                    source: params.source,
                })
            });

        let use_case = BatchIngestUseCaseImpl {
            store_repository: Arc::new(store_repo_owning(store_id)),
            resolve_product: Arc::new(resolver_by_gtin()),
            add_listing: Arc::new(add_listing),
            logger: mock_logger(),
        };

        let outcomes = use_case
            .execute(BatchIngestParams {
                owner: UserId::new("owner-a"),
                items: vec![item("Coffee", "EAN", "1234567890128", 399)],
            })
            .await
            .unwrap();

        assert!(matches!(outcomes[0].status, IngestStatus::Created(_)));
    }

    #[tokio::test]
    async fn should_mark_item_failed_on_storage_error_and_keep_going() {
        let mut resolver = MockResolveProduct::new();
        let mut calls = 0;
        resolver.expect_execute().times(2).returning(move |params| {
            calls += 1;
            if calls == 1 {
                return Err(ProductError::Repository(RepositoryError::DatabaseError));
            }
            Product::new(NewProductProps {
                name: params.name,
                barcode_type: params.barcode_type,
                gtin: params.gtin,
            })
        });

        let mut add_listing = MockAddListing::new();
        add_listing.expect_execute().times(1).returning(|params| {
            StorePrice::new(NewStorePriceProps {
                store_id: params.store_id,
                product_id: params.product_id,
                price: params.price,
                currency: params.currency,
                location: params.location,
                source: params.source,
            })
        });

        let use_case = BatchIngestUseCaseImpl {
            store_repository: Arc::new(store_repo_owning(Uuid::new_v4())),
            resolve_product: Arc::new(resolver),
            add_listing: Arc::new(add_listing),
            logger: mock_logger(),
        };

        let outcomes = use_case
            .execute(BatchIngestParams {
                owner: UserId::new("owner-a"),
                items: vec![
                    item("Coffee", "EAN", "1234567890128", 399),
                    item("Tea", "EAN", "4006381333931", 150),
                ],
            })
            .await
            .unwrap();

        assert!(matches!(outcomes[0].status, IngestStatus::Failed(_)));
        assert!(matches!(outcomes[1].status, IngestStatus::Created(_)));
    }

    #[tokio::test]
    async fn should_fail_whole_batch_when_caller_owns_no_store() {
        let mut store_repo = MockStoreRepo::new();
        store_repo.expect_find_by_owner().returning(|_| Ok(None));
        let mut resolver = MockResolveProduct::new();
        resolver.expect_execute().never();
        let mut add_listing = MockAddListing::new();
        add_listing.expect_execute().never();

        let use_case = BatchIngestUseCaseImpl {
            store_repository: Arc::new(store_repo),
            resolve_product: Arc::new(resolver),
            add_listing: Arc::new(add_listing),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BatchIngestParams {
                owner: UserId::new("nobody"),
                items: vec![item("Coffee", "EAN", "1234567890128", 399)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), StorePriceError::StoreNotFound));
    }
}
