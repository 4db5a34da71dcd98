use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::Gtin;

use super::entity::ProductEntity;
use crate::errors::map_sqlx_error;

const SELECT_PRODUCT: &str =
    "SELECT id, name, barcode_type, gtin, created_at, updated_at FROM products WHERE gtin = $1";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_gtin(&self, gtin: &Gtin) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(SELECT_PRODUCT)
            .bind(gtin.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert_if_absent(&self, product: &Product) -> Result<Product, RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, barcode_type, gtin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (gtin) DO NOTHING"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.barcode.kind.to_string())
        .bind(product.barcode.gtin.as_str())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        // Re-read: a concurrent creator may have won the insert.
        let entity = sqlx::query_as::<_, ProductEntity>(SELECT_PRODUCT)
            .bind(product.barcode.gtin.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }
}
