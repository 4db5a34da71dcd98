#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.invalid_id")]
    InvalidId,
    #[error("store.name_empty")]
    NameEmpty,
    #[error("store.invalid_location")]
    InvalidLocation,
    #[error("store.invalid_radius")]
    InvalidRadius,
    #[error("store.not_found")]
    NotFound,
    #[error("store.already_owned")]
    AlreadyOwned,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
