use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

const MAX_ID_LEN: usize = 64;

/// Directory ids are opaque, but always short ASCII tokens.
fn is_valid_id(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_ID_LEN
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn path_id(req: &HttpRequest, param: &str, code: ErrorCode) -> Result<String, AppError> {
    let raw = req.match_info().get(param).unwrap_or_default();
    if is_valid_id(raw) {
        Ok(raw.to_string())
    } else {
        Err(AppError::bad_request(code, format!("Invalid {param}: {raw:?}")))
    }
}

/// `{game_id}` path segment. Existence is checked by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameId(pub String);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(path_id(req, "game_id", ErrorCode::InvalidGameId).map(GameId))
    }
}

/// `{player_id}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerId(pub String);

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(path_id(req, "player_id", ErrorCode::InvalidPlayerId).map(PlayerId))
    }
}
