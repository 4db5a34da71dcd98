/// Shared secret used to verify HS256 bearer tokens issued by the
/// access-control service.
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
        }
    }
}
