use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::comparison::errors::ComparisonError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ComparisonError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ComparisonError::InvalidBarcode
            | ComparisonError::InvalidStoreId
            | ComparisonError::InvalidRadius => (StatusCode::BAD_REQUEST, "ValidationError"),
            ComparisonError::ProductNotFound | ComparisonError::StoreNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ComparisonError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_missing_product_and_store_as_not_found() {
        let (status, body) = ComparisonError::ProductNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "product.not_found");

        let (status, body) = ComparisonError::StoreNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "store.not_found");
    }

    #[test]
    fn should_report_invalid_input_as_bad_request() {
        for err in [
            ComparisonError::InvalidBarcode,
            ComparisonError::InvalidStoreId,
            ComparisonError::InvalidRadius,
        ] {
            assert_eq!(err.into_error_response().0, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn should_not_leak_internal_detail() {
        let (status, body) = ComparisonError::Internal.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "comparison.internal");
    }
}
