use crate::domain::errors::RepositoryError;
use crate::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum StorePriceError {
    #[error("store_price.invalid_price")]
    InvalidPrice,
    #[error("store_price.invalid_currency")]
    InvalidCurrency,
    #[error("store_price.invalid_discount")]
    InvalidDiscount,
    #[error("store_price.not_found")]
    NotFound,
    /// A current listing already exists for the (store, product) pair.
    #[error("store_price.conflict")]
    Conflict,
    #[error("store_price.not_current")]
    NotCurrent,
    #[error("store.not_found")]
    StoreNotFound,
    #[error("{0}")]
    Product(#[from] ProductError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl StorePriceError {
    /// Maps a repository failure on the listing table, turning a rejected
    /// unique-current-listing write into `Conflict`.
    pub fn from_write(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicated => StorePriceError::Conflict,
            RepositoryError::NotFound => StorePriceError::NotFound,
            other => StorePriceError::Repository(other),
        }
    }
}
