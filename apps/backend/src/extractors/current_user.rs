use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;

use crate::auth::claims::Claims;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::AppState;

pub const DEFAULT_EMOJI: &str = "🎮";

/// The authenticated caller, taken from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub emoji: String,
}

impl CurrentUser {
    pub fn from_claims(claims: Claims) -> Self {
        let emoji = claims
            .user_metadata
            .emoji
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMOJI.to_string());
        Self {
            sub: claims.sub,
            email: claims.email,
            name: claims.user_metadata.name,
            emoji,
        }
    }

    /// Lower-cased profile name, else the email, else the account id.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.email) {
            (Some(name), _) if !name.trim().is_empty() => name.trim().to_lowercase(),
            (_, Some(email)) => email.clone(),
            _ => self.sub.clone(),
        }
    }
}

/// `Authorization: Bearer <token>`; anything else is a missing bearer.
fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Ok(token.to_string())
        }
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let claims = verify_access_token(&token, &state.security)?;
            Ok(CurrentUser::from_claims(claims))
        })
    }
}
