//! Game lifecycle and score sheet routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::EntryField;
use crate::entities::games::Game;
use crate::error::AppError;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::services::games::{CreateGame, GameService};
use crate::services::scoresheets::ScoresheetService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    player_ids: Vec<String>,
    total_rounds: u32,
}

#[derive(Debug, Serialize)]
struct ActiveGameResponse {
    game: Option<Game>,
}

/// Zero-based round and seat indexes of one score cell.
#[derive(Debug, Deserialize)]
struct CellPath {
    round: usize,
    seat: usize,
}

#[derive(Debug, Deserialize)]
struct CellWrite {
    field: EntryField,
    #[serde(default)]
    value: String,
}

fn games(app_state: &AppState) -> GameService<'_> {
    GameService::new(app_state.games.as_ref(), app_state.players.as_ref())
}

/// POST /api/games
async fn create_game(
    user: CurrentUser,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let game = games(&app_state)
        .create(CreateGame {
            player_ids: body.player_ids,
            total_rounds: body.total_rounds,
            created_by: Some(user.sub),
        })
        .await?;
    Ok(HttpResponse::Created().json(game))
}

/// GET /api/games/active
async fn active_game(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = games(&app_state).active().await?;
    Ok(HttpResponse::Ok().json(ActiveGameResponse { game }))
}

/// GET /api/games/{game_id}
async fn get_game(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = games(&app_state).get(&game_id.0).await?;
    Ok(HttpResponse::Ok().json(game))
}

/// POST /api/games/{game_id}/finish
async fn finish_game(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let finished = games(&app_state)
        .finish(&game_id.0, &app_state.sheets)
        .await?;
    Ok(HttpResponse::Ok().json(finished))
}

/// GET /api/games/{game_id}/scoresheet
async fn get_scoresheet(
    _user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = ScoresheetService::new(app_state.games.as_ref(), &app_state.sheets)
        .view(&game_id.0)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// PUT /api/games/{game_id}/rounds/{round}/seats/{seat}
async fn write_cell(
    _user: CurrentUser,
    game_id: GameId,
    cell: web::Path<CellPath>,
    body: ValidatedJson<CellWrite>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = ScoresheetService::new(app_state.games.as_ref(), &app_state.sheets)
        .record(&game_id.0, cell.round, cell.seat, body.field, &body.value)
        .await?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/active", web::get().to(active_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/finish", web::post().to(finish_game))
        .route("/{game_id}/scoresheet", web::get().to(get_scoresheet))
        .route(
            "/{game_id}/rounds/{round}/seats/{seat}",
            web::put().to(write_cell),
        );
}
