use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::resolve_by_barcode::{
    ResolveProductByBarcodeParams, ResolveProductByBarcodeUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::ProductResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    resolve_by_barcode_use_case: Arc<dyn ResolveProductByBarcodeUseCase>,
}

impl ProductApi {
    pub fn new(resolve_by_barcode_use_case: Arc<dyn ResolveProductByBarcodeUseCase>) -> Self {
        Self {
            resolve_by_barcode_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Get a product by barcode
    ///
    /// Looks up the catalog entry registered under the given GTIN.
    #[oai(path = "/products/:barcode", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_barcode(&self, barcode: Path<String>) -> GetProductResponse {
        match self
            .resolve_by_barcode_use_case
            .execute(ResolveProductByBarcodeParams { gtin: barcode.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductResponse::BadRequest(json),
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
