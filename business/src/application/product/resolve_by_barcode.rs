use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::resolve_by_barcode::{
    ResolveProductByBarcodeParams, ResolveProductByBarcodeUseCase,
};
use crate::domain::product::value_objects::Gtin;

pub struct ResolveProductByBarcodeUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveProductByBarcodeUseCase for ResolveProductByBarcodeUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveProductByBarcodeParams,
    ) -> Result<Product, ProductError> {
        let gtin = Gtin::parse(&params.gtin).ok_or(ProductError::InvalidBarcode)?;

        self.logger
            .debug(&format!("Resolving product by barcode: {}", gtin));

        self.repository
            .find_by_gtin(&gtin)
            .await?
            .ok_or(ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::BarcodeType;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_by_gtin(&self, gtin: &Gtin) -> Result<Option<Product>, RepositoryError>;
            async fn insert_if_absent(&self, product: &Product) -> Result<Product, RepositoryError>;
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

    #[tokio::test]
    async fn should_return_product_when_barcode_known() {
        let product = Product::new(NewProductProps {
            name: "Coffee".to_string(),
            barcode_type: BarcodeType::Ean,
            gtin: "1234567890128".to_string(),
        })
        .unwrap();
        let expected_id = product.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_gtin()
            .withf(|gtin| gtin.as_str() == "1234567890128")
            .returning(move |_| Ok(Some(product.clone())));

        let use_case = ResolveProductByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveProductByBarcodeParams {
                gtin: "1234567890128".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().id, expected_id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_barcode_unknown() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_gtin().returning(|_| Ok(None));

        let use_case = ResolveProductByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveProductByBarcodeParams {
                gtin: "12345678".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_malformed_barcode_without_lookup() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_gtin().never();

        let use_case = ResolveProductByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveProductByBarcodeParams {
                gtin: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidBarcode));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_gtin()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ResolveProductByBarcodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResolveProductByBarcodeParams {
                gtin: "12345678".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
