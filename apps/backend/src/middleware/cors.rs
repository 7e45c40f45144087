use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_HEADER;

/// CORS for the browser client. Origins come from configuration, already
/// validated by `config::app::parse_origins`.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_HEADER)])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
