use std::sync::Arc;

use business::domain::logger::Logger;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::store::repository::StoreRepositoryPostgres;
use persistence::store_price::repository::StorePriceRepositoryPostgres;

use business::application::comparison::compare::CompareUseCaseImpl;
use business::application::product::resolve_by_barcode::ResolveProductByBarcodeUseCaseImpl;
use business::application::product::resolve_or_create::ResolveOrCreateProductUseCaseImpl;
use business::application::store::create::CreateStoreUseCaseImpl;
use business::application::store::find_nearby::FindNearbyStoresUseCaseImpl;
use business::application::store::get_by_id::GetStoreByIdUseCaseImpl;
use business::application::store::update::UpdateStoreUseCaseImpl;
use business::application::store_price::add_listing::AddListingUseCaseImpl;
use business::application::store_price::apply_discount::ApplyDiscountUseCaseImpl;
use business::application::store_price::batch_ingest::BatchIngestUseCaseImpl;
use business::application::store_price::list_current::ListCurrentPricesUseCaseImpl;
use business::application::store_price::supersede::SupersedeListingUseCaseImpl;

use crate::api::comparison::routes::ComparisonApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::store::routes::StoreApi;
use crate::api::store_price::routes::StorePriceApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub comparison_api: ComparisonApi,
    pub store_api: StoreApi,
    pub store_price_api: StorePriceApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let store_repository = Arc::new(StoreRepositoryPostgres::new(pool.clone()));
        let store_price_repository = Arc::new(StorePriceRepositoryPostgres::new(pool));

        // Catalog
        let resolve_by_barcode = Arc::new(ResolveProductByBarcodeUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let resolve_or_create = Arc::new(ResolveOrCreateProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Store directory
        let get_store = Arc::new(GetStoreByIdUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let find_nearby = Arc::new(FindNearbyStoresUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let create_store = Arc::new(CreateStoreUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let update_store = Arc::new(UpdateStoreUseCaseImpl {
            repository: store_repository.clone(),
            logger: logger.clone(),
        });

        // Price ledger
        let add_listing = Arc::new(AddListingUseCaseImpl {
            repository: store_price_repository.clone(),
            logger: logger.clone(),
        });
        let list_current = Arc::new(ListCurrentPricesUseCaseImpl {
            repository: store_price_repository.clone(),
            logger: logger.clone(),
        });
        let apply_discount = Arc::new(ApplyDiscountUseCaseImpl {
            repository: store_price_repository.clone(),
            store_repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let supersede = Arc::new(SupersedeListingUseCaseImpl {
            repository: store_price_repository,
            store_repository: store_repository.clone(),
            logger: logger.clone(),
        });
        let batch_ingest = Arc::new(BatchIngestUseCaseImpl {
            store_repository,
            resolve_product: resolve_or_create,
            add_listing,
            logger: logger.clone(),
        });

        // Comparison engine
        let compare = Arc::new(CompareUseCaseImpl {
            resolve_product: resolve_by_barcode.clone(),
            get_store,
            find_nearby: find_nearby.clone(),
            list_prices: list_current,
            logger,
        });

        Self {
            health_api,
            product_api: ProductApi::new(resolve_by_barcode),
            comparison_api: ComparisonApi::new(compare),
            store_api: StoreApi::new(create_store, update_store, find_nearby),
            store_price_api: StorePriceApi::new(batch_ingest, apply_discount, supersede),
        }
    }
}
