//! Player directory routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::entities::players::NewPlayer;
use crate::error::AppError;
use crate::extractors::{CurrentUser, PlayerId, ValidatedJson};
use crate::services::players::PlayerService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreatePlayerRequest {
    name: String,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
    limit: Option<usize>,
}

/// POST /api/players
async fn create_player(
    _user: CurrentUser,
    body: ValidatedJson<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let player = PlayerService::new(app_state.players.as_ref())
        .create(NewPlayer {
            name: body.name,
            emoji: body.emoji,
            email: body.email,
        })
        .await?;
    Ok(HttpResponse::Created().json(player))
}

/// GET /api/players?q=&limit=
async fn search_players(
    _user: CurrentUser,
    query: web::Query<SearchQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let players = PlayerService::new(app_state.players.as_ref())
        .search(&query.q, query.limit)
        .await?;
    Ok(HttpResponse::Ok().json(players))
}

/// GET /api/players/{player_id}
async fn get_player(
    _user: CurrentUser,
    player_id: PlayerId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = PlayerService::new(app_state.players.as_ref())
        .get(&player_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(player))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_player))
        .route("", web::get().to(search_players))
        .route("/{player_id}", web::get().to(get_player));
}
