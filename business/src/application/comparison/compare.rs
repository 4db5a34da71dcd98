use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::ComparisonResult;
use crate::domain::comparison::pricing::{build_comparison, manual_entry_required};
use crate::domain::comparison::use_cases::compare::{CompareParams, CompareUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::resolve_by_barcode::{
    ResolveProductByBarcodeParams, ResolveProductByBarcodeUseCase,
};
use crate::domain::product::value_objects::Gtin;
use crate::domain::store::errors::StoreError;
use crate::domain::store::use_cases::find_nearby::{
    FindNearbyStoresParams, FindNearbyStoresUseCase,
};
use crate::domain::store::use_cases::get_by_id::{GetStoreByIdParams, GetStoreByIdUseCase};
use crate::domain::store_price::use_cases::list_current::{
    ListCurrentPricesParams, ListCurrentPricesUseCase,
};

/// Compares the price of one product across the reference store and the
/// stores around it.
///
/// Every input is validated before storage is touched. An absence of prices
/// is a successful result with `manual_price_entry_required` set.
pub struct CompareUseCaseImpl {
    pub resolve_product: Arc<dyn ResolveProductByBarcodeUseCase>,
    pub get_store: Arc<dyn GetStoreByIdUseCase>,
    pub find_nearby: Arc<dyn FindNearbyStoresUseCase>,
    pub list_prices: Arc<dyn ListCurrentPricesUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl CompareUseCaseImpl {
    fn internal(&self, context: &str, err: impl std::fmt::Display) -> ComparisonError {
        self.logger.error(&format!("{}: {}", context, err));
        ComparisonError::Internal
    }
}

#[async_trait]
impl CompareUseCase for CompareUseCaseImpl {
    async fn execute(&self, params: CompareParams) -> Result<ComparisonResult, ComparisonError> {
        if Gtin::parse(&params.barcode).is_none() {
            return Err(ComparisonError::InvalidBarcode);
        }
        let store_id =
            Uuid::parse_str(&params.store_id).map_err(|_| ComparisonError::InvalidStoreId)?;
        if matches!(params.radius_meters, Some(r) if r <= 0) {
            return Err(ComparisonError::InvalidRadius);
        }

        let product = self
            .resolve_product
            .execute(ResolveProductByBarcodeParams {
                gtin: params.barcode,
            })
            .await
            .map_err(|e| match e {
                ProductError::NotFound => ComparisonError::ProductNotFound,
                ProductError::InvalidBarcode => ComparisonError::InvalidBarcode,
                other => self.internal("Failed to resolve product", other),
            })?;

        let reference = self
            .get_store
            .execute(GetStoreByIdParams {
                id: store_id.to_string(),
            })
            .await
            .map_err(|e| match e {
                StoreError::NotFound => ComparisonError::StoreNotFound,
                StoreError::InvalidId => ComparisonError::InvalidStoreId,
                other => self.internal("Failed to load reference store", other),
            })?;

        let nearby = self
            .find_nearby
            .execute(FindNearbyStoresParams {
                center: reference.location,
                radius_meters: params.radius_meters,
            })
            .await
            .map_err(|e| match e {
                StoreError::InvalidRadius => ComparisonError::InvalidRadius,
                other => self.internal("Radius query failed", other),
            })?;

        let mut candidates: Vec<Uuid> = nearby.iter().map(|n| n.store.id).collect();
        if !candidates.contains(&reference.id) {
            candidates.insert(0, reference.id);
        }

        let listings = self
            .list_prices
            .execute(ListCurrentPricesParams {
                product_id: product.id,
                store_ids: candidates,
            })
            .await
            .map_err(|e| self.internal("Failed to list current prices", e))?;

        if listings.is_empty() {
            self.logger.info(&format!(
                "No prices for {} around store {}, manual entry required",
                product.barcode.gtin.as_str(),
                reference.id
            ));
            return Ok(manual_entry_required(&product));
        }

        let result = build_comparison(&product, &listings, reference.id);
        self.logger.debug(&format!(
            "Compared {} across {} listings",
            product.barcode.gtin.as_str(),
            listings.len()
        ));
        Ok(result)
    }
}
