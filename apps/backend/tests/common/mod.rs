#![allow(dead_code)]

use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web, App};
use backend_test_support::unique_helpers::unique_name;
use serde_json::{json, Value};
use triunfo::auth::claims::UserMetadata;
use triunfo::{
    mint_access_token, routes, AppState, RequestTrace, SecurityConfig, StructuredLogger, TraceSpan,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_state() -> AppState {
    AppState::in_memory(SecurityConfig::new(TEST_SECRET.as_bytes()))
}

/// The production route table and middleware stack, minus CORS.
pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// `Authorization` header value for a freshly minted token.
pub fn bearer_at(state: &AppState, sub: &str, name: Option<&str>, now: SystemTime) -> String {
    let token = mint_access_token(
        sub,
        Some(&format!("{sub}@example.test")),
        UserMetadata {
            name: name.map(str::to_string),
            emoji: None,
        },
        now,
        &state.security,
    )
    .expect("mint token");
    format!("Bearer {token}")
}

pub fn bearer(state: &AppState) -> String {
    bearer_at(state, "user-1", Some("Tester"), SystemTime::now())
}

pub fn expired_bearer(state: &AppState) -> String {
    bearer_at(
        state,
        "user-1",
        None,
        SystemTime::now() - Duration::from_secs(2 * 60 * 60),
    )
}

pub async fn get<S>(app: &S, uri: &str, auth: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header((AUTHORIZATION, auth))
        .to_request();
    test::call_service(app, req).await
}

pub async fn post<S>(app: &S, uri: &str, auth: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header((AUTHORIZATION, auth))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

pub async fn put<S>(app: &S, uri: &str, auth: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::put()
        .uri(uri)
        .insert_header((AUTHORIZATION, auth))
        .set_json(body)
        .to_request();
    test::call_service(app, req).await
}

/// Create a player with a unique name and return its id.
pub async fn seed_player<S>(app: &S, auth: &str, prefix: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = post(app, "/api/players", auth, json!({ "name": unique_name(prefix) })).await;
    assert_eq!(resp.status().as_u16(), 201);
    let player: Value = test::read_body_json(resp).await;
    player["id"].as_str().expect("player id").to_string()
}

/// Create an active game over `seats` fresh players and return its JSON.
pub async fn seed_game<S>(app: &S, auth: &str, seats: usize, total_rounds: u32) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let mut ids = Vec::with_capacity(seats);
    for seat in 0..seats {
        ids.push(seed_player(app, auth, &format!("p{seat}")).await);
    }
    let resp = post(
        app,
        "/api/games",
        auth,
        json!({ "player_ids": ids, "total_rounds": total_rounds }),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 201);
    test::read_body_json(resp).await
}
