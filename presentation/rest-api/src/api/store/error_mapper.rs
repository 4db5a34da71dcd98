use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StoreError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            StoreError::InvalidId => (StatusCode::BAD_REQUEST, "ValidationError", "store.invalid_id"),
            StoreError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "store.name_empty"),
            StoreError::InvalidLocation => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "store.invalid_location",
            ),
            StoreError::InvalidRadius => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "store.invalid_radius",
            ),
            StoreError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "store.not_found"),
            StoreError::AlreadyOwned => (StatusCode::CONFLICT, "Conflict", "store.already_owned"),
            StoreError::Repository(_) => (
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

    #[test]
    fn should_report_second_store_as_conflict() {
        let (status, body) = StoreError::AlreadyOwned.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.name, "Conflict");
    }

    #[test]
    fn should_report_bad_location_as_validation_error() {
        assert_eq!(
            StoreError::InvalidLocation.into_error_response().0,
            StatusCode::BAD_REQUEST
        );
    }
}
