use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::comparison::use_cases::compare::{CompareParams, CompareUseCase};

use crate::api::comparison::dto::ComparisonResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ComparisonApi {
    compare_use_case: Arc<dyn CompareUseCase>,
}

impl ComparisonApi {
    pub fn new(compare_use_case: Arc<dyn CompareUseCase>) -> Self {
        Self { compare_use_case }
    }
}

/// Price comparison API
#[OpenApi]
impl ComparisonApi {
    /// Compare a product's price around a store
    ///
    /// Labels every current price of the product in stores within
    /// `maxDistance` meters (default 5000) of the reference store against the
    /// local average. When nobody nearby lists the product the response sets
    /// `manualPriceEntryRequired`.
    #[oai(
        path = "/products/:barcode/compare",
        method = "get",
        tag = "ApiTags::Comparison"
    )]
    async fn compare(
        &self,
        barcode: Path<String>,
        /// Reference store identifier
        #[oai(name = "storeId")]
        store_id: Query<String>,
        /// Search radius in meters
        #[oai(name = "maxDistance")]
        max_distance: Query<Option<i64>>,
    ) -> CompareResponse {
        let params = CompareParams {
            barcode: barcode.0,
            store_id: store_id.0,
            radius_meters: max_distance.0,
        };

        match self.compare_use_case.execute(params).await {
            Ok(result) => CompareResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CompareResponse::BadRequest(json),
                    404 => CompareResponse::NotFound(json),
                    _ => CompareResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CompareResponse {
    #[oai(status = 200)]
    Ok(Json<ComparisonResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
