use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::resolve_or_create::{
    ResolveOrCreateProductParams, ResolveOrCreateProductUseCase,
};
use crate::domain::product::value_objects::Gtin;

pub struct ResolveOrCreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolveOrCreateProductUseCase for ResolveOrCreateProductUseCaseImpl {
    async fn execute(
        &self,
        params: ResolveOrCreateProductParams,
    ) -> Result<Product, ProductError> {
        let gtin = Gtin::parse(&params.gtin).ok_or(ProductError::InvalidBarcode)?;

        if let Some(existing) = self.repository.find_by_gtin(&gtin).await? {
            return Ok(existing);
        }

        let product = Product::new(NewProductProps {
            name: params.name,
            barcode_type: params.barcode_type,
            gtin: params.gtin,
        })?;

        // Another request may have registered the same GTIN in the meantime;
        // the repository hands back whichever row won.
        let stored = self.repository.insert_if_absent(&product).await?;

        if stored.id == product.id {
            self.logger.info(&format!(
                "Product registered: {} ({})",
                stored.name, stored.barcode.gtin
            ));
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::resolve_by_barcode::ResolveProductByBarcodeUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::use_cases::resolve_by_barcode::{
        ResolveProductByBarcodeParams, ResolveProductByBarcodeUseCase,
    };
    use crate::domain::product::value_objects::BarcodeType;
    use mockall::mock;
    use std::collections::HashMap;
    use std::sync::Mutex;

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

    /// Keyed on GTIN like the unique index in the database.
    #[derive(Default)]
    struct InMemoryProducts {
        rows: Mutex<HashMap<String, Product>>,
    }

    #[async_trait]
    impl ProductRepository for InMemoryProducts {
        async fn find_by_gtin(&self, gtin: &Gtin) -> Result<Option<Product>, RepositoryError> {
            Ok(self.rows.lock().unwrap().get(gtin.as_str()).cloned())
        }

        async fn insert_if_absent(&self, product: &Product) -> Result<Product, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let stored = rows
                .entry(product.barcode.gtin.as_str().to_string())
                .or_insert_with(|| product.clone());
            Ok(stored.clone())
        }
    }

    fn params(name: &str, gtin: &str) -> ResolveOrCreateProductParams {
        ResolveOrCreateProductParams {
            name: name.to_string(),
            barcode_type: BarcodeType::Ean,
            gtin: gtin.to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_existing_product_without_inserting() {
        let existing = Product::new(NewProductProps {
            name: "Coffee".to_string(),
            barcode_type: BarcodeType::Ean,
            gtin: "1234567890128".to_string(),
        })
        .unwrap();
        let existing_id = existing.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_gtin()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_insert_if_absent().never();

        let use_case = ResolveOrCreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("Different spelling", "1234567890128"))
            .await
            .unwrap();

        assert_eq!(product.id, existing_id);
        assert_eq!(product.name, "Coffee");
    }

    #[tokio::test]
    async fn should_create_product_on_first_sighting() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_gtin().returning(|_| Ok(None));
        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .returning(|p| Ok(p.clone()));

        let use_case = ResolveOrCreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("Oat Milk", "73102345"))
            .await
            .unwrap();

        assert_eq!(product.name, "Oat Milk");
        assert_eq!(product.barcode.gtin.as_str(), "73102345");
    }

    #[tokio::test]
    async fn should_reject_malformed_gtin_before_lookup() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_gtin().never();
        mock_repo.expect_insert_if_absent().never();

        let use_case = ResolveOrCreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Coffee", "1234")).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidBarcode));
    }

    #[tokio::test]
    async fn should_reject_blank_name_for_new_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_gtin().returning(|_| Ok(None));
        mock_repo.expect_insert_if_absent().never();

        let use_case = ResolveOrCreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ", "12345678")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_resolve_ingested_gtin_to_same_product_and_never_duplicate() {
        let repository = Arc::new(InMemoryProducts::default());
        let create = ResolveOrCreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let resolve = ResolveProductByBarcodeUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        let first = create
            .execute(params("Coffee", "1234567890128"))
            .await
            .unwrap();
        let resolved = resolve
            .execute(ResolveProductByBarcodeParams {
                gtin: "1234567890128".to_string(),
            })
            .await
            .unwrap();
        let second = create
            .execute(params("Coffee", "1234567890128"))
            .await
            .unwrap();

        assert_eq!(resolved.id, first.id);
        assert_eq!(second.id, first.id);
        assert_eq!(repository.rows.lock().unwrap().len(), 1);
    }
}
