use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{PricedListing, StorePrice};

#[async_trait]
pub trait StorePriceRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<StorePrice, RepositoryError>;

    async fn find_current(
        &self,
        store_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<StorePrice>, RepositoryError>;

    /// Current listings of `product_id` at any of `store_ids`, cheapest list
    /// price first, each joined with its store.
    async fn list_current_for_stores(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Vec<PricedListing>, RepositoryError>;

    /// Fails with `RepositoryError::Duplicated` when a current listing already
    /// exists for the same (store, product).
    async fn insert(&self, listing: &StorePrice) -> Result<(), RepositoryError>;

    /// Writes the discount only while the listing is still current;
    /// `RepositoryError::NotFound` otherwise.
    async fn update_discount(&self, listing: &StorePrice) -> Result<(), RepositoryError>;

    /// Atomically retires `old_id` and inserts `replacement` as the current
    /// listing. `RepositoryError::NotFound` if `old_id` is no longer current.
    async fn supersede(
        &self,
        old_id: Uuid,
        replacement: &StorePrice,
    ) -> Result<(), RepositoryError>;
}
