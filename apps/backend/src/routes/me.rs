use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::CurrentUser;

#[derive(Debug, Serialize)]
struct MeResponse {
    sub: String,
    email: Option<String>,
    display_name: String,
    emoji: String,
}

/// GET /api/me
async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MeResponse {
        display_name: user.display_name(),
        sub: user.sub,
        email: user.email,
        emoji: user.emoji,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(me));
}
