use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{GeoPoint, UserId};
use business::domain::store::model::{NearbyStore, Store};
use business::domain::store::repository::StoreRepository;

use super::entity::{NearbyStoreEntity, StoreEntity};
use crate::errors::map_sqlx_error;

pub struct StoreRepositoryPostgres {
    pool: PgPool,
}

impl StoreRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreEntity>(
            r#"SELECT id, name, ST_X(location::geometry) AS lon, ST_Y(location::geometry) AS lat,
                owner_id, created_at, updated_at
            FROM stores WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Store>, RepositoryError> {
        let entity = sqlx::query_as::<_, StoreEntity>(
            r#"SELECT id, name, ST_X(location::geometry) AS lon, ST_Y(location::geometry) AS lat,
                owner_id, created_at, updated_at
            FROM stores WHERE owner_id = $1"#,
        )
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_meters: i64,
    ) -> Result<Vec<NearbyStore>, RepositoryError> {
        let entities = sqlx::query_as::<_, NearbyStoreEntity>(
            r#"SELECT id, name, ST_X(location::geometry) AS lon, ST_Y(location::geometry) AS lat,
                owner_id, created_at, updated_at,
                ST_Distance(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography) AS distance_meters
            FROM stores
            WHERE ST_DWithin(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3)
            ORDER BY distance_meters ASC, id ASC"#,
        )
        .bind(center.lon())
        .bind(center.lat())
        .bind(radius_meters as f64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, store: &Store) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO stores (id, name, location, owner_id, created_at, updated_at)
            VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                location = EXCLUDED.location,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(store.location.lon())
        .bind(store.location.lat())
        .bind(store.owner.as_str())
        .bind(store.created_at)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
