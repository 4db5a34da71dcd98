use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::{GeoPoint, UserId};
use business::domain::store::model::{NearbyStore, Store};

/// Row of `stores` with the geography column split into `lon`/`lat`.
#[derive(Debug, FromRow)]
pub struct StoreEntity {
    pub id: Uuid,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoreEntity {
    pub fn into_domain(self) -> Store {
        Store::from_repository(
            self.id,
            self.name,
            GeoPoint::from_repository(self.lon, self.lat),
            UserId::new(self.owner_id),
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct NearbyStoreEntity {
    #[sqlx(flatten)]
    pub store: StoreEntity,
    pub distance_meters: f64,
}

impl NearbyStoreEntity {
    pub fn into_domain(self) -> NearbyStore {
        NearbyStore {
            store: self.store.into_domain(),
            distance_meters: self.distance_meters,
        }
    }
}
