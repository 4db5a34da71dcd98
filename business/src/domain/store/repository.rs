use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{GeoPoint, UserId};

use super::model::{NearbyStore, Store};

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError>;
    async fn find_by_owner(&self, owner: &UserId) -> Result<Option<Store>, RepositoryError>;

    /// Stores whose Earth-surface distance to `center` is at most `radius_meters`,
    /// nearest first.
    async fn find_within_radius(
        &self,
        center: GeoPoint,
        radius_meters: i64,
    ) -> Result<Vec<NearbyStore>, RepositoryError>;

    /// Inserts or updates the store. A second store for the same owner fails
    /// with `RepositoryError::Duplicated`.
    async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
}
