use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use crate::api::security::AuthError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("Unauthorized", "auth.invalid_token"),
            ),
            AuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Forbidden", "auth.forbidden"),
            ),
        }
    }
}
