use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::InvalidBarcode => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_barcode",
            ),
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, ErrorResponse::new(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_product_errors_to_http_statuses() {
        assert_eq!(
            ProductError::InvalidBarcode.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProductError::NotFound.into_error_response().0,
            StatusCode::NOT_FOUND
        );

        let (status, body) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }
}
