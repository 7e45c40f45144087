use actix_web::{web, Error};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod games;
pub mod health;
pub mod me;
pub mod players;
pub mod scoring;

/// Path and query parse failures render as problem details like every
/// other error.
fn path_error(err: actix_web::error::PathError, _req: &actix_web::HttpRequest) -> Error {
    AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
}

fn query_error(err: actix_web::error::QueryPayloadError, _req: &actix_web::HttpRequest) -> Error {
    AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
}

/// Full route table. `main.rs` wraps it with middleware; tests mount it as is.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    cfg.service(web::scope("/health").configure(health::configure_routes));
    cfg.service(web::scope("/api/me").configure(me::configure_routes));
    cfg.service(web::scope("/api/players").configure(players::configure_routes));
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
    cfg.service(web::scope("/api/scoring").configure(scoring::configure_routes));
}
