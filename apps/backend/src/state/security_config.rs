use jsonwebtoken::Algorithm;

/// Token verification settings shared with the external auth service.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared HMAC secret
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm (HS256)
    pub algorithm: Algorithm,
    /// Required `aud` claim
    pub audience: String,
}

pub const DEFAULT_AUDIENCE: &str = "authenticated";

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }
}
