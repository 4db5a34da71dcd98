use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::identity::{AccountStatus, AuthenticatedUser, UserRole};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.forbidden")]
    Forbidden,
}

/// Identity claims issued by the access-control service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl Claims {
    /// The caller as a store owner allowed to manage its store, or
    /// `AuthError::Forbidden`.
    pub fn store_owner(&self) -> Result<AuthenticatedUser, AuthError> {
        let role = self
            .role
            .parse::<UserRole>()
            .map_err(|_| AuthError::Forbidden)?;
        let status = self
            .status
            .parse::<AccountStatus>()
            .map_err(|_| AuthError::Forbidden)?;

        let user = AuthenticatedUser {
            user_id: UserId::new(self.user_id.as_str()),
            role,
            status,
        };
        if !user.can_manage_store() {
            return Err(AuthError::Forbidden);
        }
        Ok(user)
    }
}

/// HS256 verification key, attached to every request as poem data.
#[derive(Clone)]
pub struct JwtKeys {
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is checked when present but not required.
        validation.set_required_spec_claims::<&str>(&[]);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Bearer token rejected: {e}");
                AuthError::InvalidToken
            })
    }
}

/// Bearer JWT of a store-owner session
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "store_owner_checker")]
pub struct StoreOwnerBearer(pub Claims);

async fn store_owner_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Claims> {
    let Some(keys) = req.data::<JwtKeys>() else {
        tracing::error!("JwtKeys missing from request data");
        return None;
    };

    let claims = keys.verify(&bearer.token).ok()?;
    tracing::debug!(
        "Authenticated {} ({})",
        claims.user_id,
        claims.email.as_deref().unwrap_or("no email")
    );
    Some(claims)
}
