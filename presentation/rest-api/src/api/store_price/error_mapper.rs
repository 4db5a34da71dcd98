use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store_price::errors::StorePriceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StorePriceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if let StorePriceError::Product(err) = self {
            return err.into_error_response();
        }

        let (status, name) = match &self {
            StorePriceError::InvalidPrice
            | StorePriceError::InvalidCurrency
            | StorePriceError::InvalidDiscount => (StatusCode::BAD_REQUEST, "ValidationError"),
            StorePriceError::NotFound | StorePriceError::StoreNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            StorePriceError::Conflict | StorePriceError::NotCurrent => {
                (StatusCode::CONFLICT, "Conflict")
            }
            StorePriceError::Product(_) | StorePriceError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::new(name, &self.to_string()))
    }
}
