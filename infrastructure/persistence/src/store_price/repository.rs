use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::store_price::model::{PricedListing, StorePrice};
use business::domain::store_price::repository::StorePriceRepository;

use super::entity::{PricedListingEntity, StorePriceEntity};
use crate::errors::map_sqlx_error;
use crate::money::to_decimal;

const LISTING_COLUMNS: &str = r#"sp.id, sp.store_id, sp.product_id, sp.price, sp.currency,
    sp.discounted_price, sp.is_current, sp.source,
    ST_X(sp.location::geometry) AS lon, ST_Y(sp.location::geometry) AS lat,
    sp.created_at, sp.updated_at"#;

const INSERT_LISTING: &str = r#"INSERT INTO store_prices
    (id, store_id, product_id, price, currency, discounted_price, is_current, source, location, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
        CASE WHEN $9::float8 IS NULL THEN NULL
             ELSE ST_SetSRID(ST_MakePoint($9, $10), 4326)::geography END,
        $11, $12)"#;

pub struct StorePriceRepositoryPostgres {
    pool: PgPool,
}

impl StorePriceRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn bind_listing<'q>(
    query: sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>,
    listing: &'q StorePrice,
) -> sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments> {
    query
        .bind(listing.id)
        .bind(listing.store_id)
        .bind(listing.product_id)
        .bind(to_decimal(listing.price))
        .bind(listing.currency.as_str())
        .bind(listing.discounted_price.map(to_decimal))
        .bind(listing.is_current)
        .bind(listing.source.to_string())
        .bind(listing.location.map(|l| l.lon()))
        .bind(listing.location.map(|l| l.lat()))
        .bind(listing.created_at)
        .bind(listing.updated_at)
}

#[async_trait]
impl StorePriceRepository for StorePriceRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<StorePrice, RepositoryError> {
        let entity = sqlx::query_as::<_, StorePriceEntity>(&format!(
            "SELECT {LISTING_COLUMNS} FROM store_prices sp WHERE sp.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_current(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<StorePrice>, RepositoryError> {
        let entity = sqlx::query_as::<_, StorePriceEntity>(&format!(
            "SELECT {LISTING_COLUMNS} FROM store_prices sp
            WHERE sp.store_id = $1 AND sp.product_id = $2 AND sp.is_current"
        ))
        .bind(store_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn list_current_for_stores(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Vec<PricedListing>, RepositoryError> {
        let entities = sqlx::query_as::<_, PricedListingEntity>(&format!(
            "SELECT {LISTING_COLUMNS}, s.name AS store_name,
                ST_X(s.location::geometry) AS store_lon, ST_Y(s.location::geometry) AS store_lat
            FROM store_prices sp
            JOIN stores s ON s.id = sp.store_id
            WHERE sp.product_id = $1 AND sp.store_id = ANY($2) AND sp.is_current
            ORDER BY sp.price ASC, sp.created_at ASC"
        ))
        .bind(product_id)
        .bind(store_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn insert(&self, listing: &StorePrice) -> Result<(), RepositoryError> {
        bind_listing(sqlx::query(INSERT_LISTING), listing)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update_discount(&self, listing: &StorePrice) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE store_prices SET discounted_price = $2, updated_at = $3 WHERE id = $1 AND is_current",
        )
        .bind(listing.id)
        .bind(listing.discounted_price.map(to_decimal))
        .bind(listing.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn supersede(
        &self,
        old_id: Uuid,
        replacement: &StorePrice,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let retired = sqlx::query(
            "UPDATE store_prices SET is_current = FALSE, updated_at = $2 WHERE id = $1 AND is_current",
        )
        .bind(old_id)
        .bind(replacement.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Dropping the transaction without commit rolls it back.
        if retired.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        bind_listing(sqlx::query(INSERT_LISTING), replacement)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}
