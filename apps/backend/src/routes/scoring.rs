//! Stateless access to the scoring engine.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{compute_totals, generate_round_labels, Entry, MAX_PEAK};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;

/// Upper bound on seats accepted by the totals endpoint.
pub const MAX_TOTALS_PLAYERS: usize = 64;

#[derive(Debug, Serialize)]
struct LabelsResponse {
    peak: u32,
    labels: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct TotalsRequest {
    player_count: usize,
    #[serde(default)]
    rounds: Vec<Vec<Entry>>,
}

#[derive(Debug, Serialize)]
struct TotalsResponse {
    totals: Vec<i64>,
}

/// GET /api/scoring/labels/{peak}
async fn labels(peak: web::Path<u32>) -> Result<HttpResponse, AppError> {
    let peak = peak.into_inner();
    if peak > MAX_PEAK {
        return Err(AppError::invalid(
            ErrorCode::InvalidArgument,
            format!("peak must be at most {MAX_PEAK}"),
        ));
    }
    let labels = generate_round_labels(peak)?;
    Ok(HttpResponse::Ok().json(LabelsResponse { peak, labels }))
}

/// POST /api/scoring/totals
async fn totals(body: ValidatedJson<TotalsRequest>) -> Result<HttpResponse, AppError> {
    if body.player_count > MAX_TOTALS_PLAYERS {
        return Err(AppError::invalid(
            ErrorCode::InvalidArgument,
            format!("player_count must be at most {MAX_TOTALS_PLAYERS}"),
        ));
    }
    let totals = compute_totals(body.player_count, &body.rounds);
    Ok(HttpResponse::Ok().json(TotalsResponse { totals }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/labels/{peak}", web::get().to(labels))
        .route("/totals", web::post().to(totals));
}
