use async_trait::async_trait;

use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::ComparisonResult;

pub struct CompareParams {
    pub barcode: String,
    /// Raw reference store identifier; must parse as a UUID.
    pub store_id: String,
    pub radius_meters: Option<i64>,
}

#[async_trait]
pub trait CompareUseCase: Send + Sync {
    async fn execute(&self, params: CompareParams) -> Result<ComparisonResult, ComparisonError>;
}
