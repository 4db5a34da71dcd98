#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("comparison.invalid_barcode")]
    InvalidBarcode,
    #[error("comparison.invalid_store_id")]
    InvalidStoreId,
    #[error("comparison.invalid_radius")]
    InvalidRadius,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("store.not_found")]
    StoreNotFound,
    /// Storage or geo-query failure. The cause is logged, never returned.
    #[error("comparison.internal")]
    Internal,
}
