use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::{Claims, UserMetadata};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Session lifetime, matching the auth service's default.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Mint a session token the way the auth service does. The backend only
/// verifies tokens in production; minting serves tests and local tooling.
pub fn mint_access_token(
    sub: &str,
    email: Option<&str>,
    user_metadata: UserMetadata,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        email: email.map(str::to_string),
        aud: security.audience.clone(),
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
        user_metadata,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature, expiry and audience, and return the claims.
///
/// Expired tokens map to `UNAUTHORIZED_EXPIRED_JWT`, tokens that cannot be
/// parsed at all to `UNAUTHORIZED_MALFORMED_JWT`, and well-formed tokens
/// failing verification (signature, audience) to `UNAUTHORIZED_INVALID_JWT`.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.set_audience(&[security.audience.as_str()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            AppError::unauthorized_malformed_jwt()
        }
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::*;

    fn metadata() -> UserMetadata {
        UserMetadata {
            name: Some("Lucía".into()),
            emoji: Some("🃏".into()),
        }
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        let now = SystemTime::now();

        let token =
            mint_access_token("sub-123", Some("lucia@example.test"), metadata(), now, &security)
                .unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "sub-123");
        assert_eq!(claims.email.as_deref(), Some("lucia@example.test"));
        assert_eq!(claims.aud, "authenticated");
        assert_eq!(claims.user_metadata, metadata());
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        // Two hours ago, so the one-hour token is well past the leeway.
        let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);

        let token = mint_access_token("sub-expired", None, UserMetadata::default(), issued, &security)
            .unwrap();
        let result = verify_access_token(&token, &security);

        assert!(matches!(result, Err(AppError::UnauthorizedExpiredJwt)));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let security_b = SecurityConfig::new("secret-B".as_bytes());

        let token = mint_access_token(
            "sub-bad-sig",
            None,
            UserMetadata::default(),
            SystemTime::now(),
            &security_a,
        )
        .unwrap();

        assert!(matches!(
            verify_access_token(&token, &security_b),
            Err(AppError::UnauthorizedInvalidJwt)
        ));
    }

    #[test]
    fn test_wrong_audience() {
        let issuer = SecurityConfig::new("shared".as_bytes()).with_audience("service_role");
        let verifier = SecurityConfig::new("shared".as_bytes());

        let token = mint_access_token(
            "sub-aud",
            None,
            UserMetadata::default(),
            SystemTime::now(),
            &issuer,
        )
        .unwrap();

        assert!(matches!(
            verify_access_token(&token, &verifier),
            Err(AppError::UnauthorizedInvalidJwt)
        ));
    }

    #[test]
    fn test_garbage_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
        for garbage in ["not.a.jwt", "not-a-jwt", "", "a.b"] {
            assert!(
                matches!(
                    verify_access_token(garbage, &security),
                    Err(AppError::UnauthorizedMalformedJwt)
                ),
                "{garbage:?} should be malformed"
            );
        }
    }
}
