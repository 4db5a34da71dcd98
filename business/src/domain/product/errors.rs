#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_barcode")]
    InvalidBarcode,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
