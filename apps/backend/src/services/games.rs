//! Game lifecycle: creation with a validated roster, lookup, finishing.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use crate::domain::leaders;
use crate::domain::rules::{validate_peak, MIN_PLAYERS};
use crate::entities::games::{Game, GameStatus, NewGame};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::repos::{GameDirectory, PlayerDirectory};
use crate::services::scoresheets::SheetStore;

/// Creation request: roster in seat order plus the peak deal size.
#[derive(Debug, Clone)]
pub struct CreateGame {
    pub player_ids: Vec<String>,
    pub total_rounds: u32,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinishedGame {
    pub game: Game,
    pub totals: Vec<i64>,
    /// Seats holding the highest total; more than one on a tie.
    pub leaders: Vec<usize>,
}

pub struct GameService<'a> {
    games: &'a dyn GameDirectory,
    players: &'a dyn PlayerDirectory,
}

impl<'a> GameService<'a> {
    pub fn new(games: &'a dyn GameDirectory, players: &'a dyn PlayerDirectory) -> Self {
        Self { games, players }
    }

    pub async fn create(&self, input: CreateGame) -> Result<Game, DomainError> {
        validate_peak(input.total_rounds)?;
        validate_roster(&input.player_ids)?;

        let mut roster = Vec::with_capacity(input.player_ids.len());
        for id in &input.player_ids {
            let player = self.players.find_by_id(id).await?.ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
            })?;
            roster.push(player);
        }

        let game = self
            .games
            .create(NewGame {
                players: roster,
                total_rounds: input.total_rounds,
                status: GameStatus::Active,
                created_by: input.created_by,
            })
            .await?;
        info!(
            game_id = %game.id,
            players = game.players.len(),
            total_rounds = game.total_rounds,
            "game created"
        );
        Ok(game)
    }

    pub async fn get(&self, id: &str) -> Result<Game, DomainError> {
        self.games
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")))
    }

    pub async fn active(&self) -> Result<Option<Game>, DomainError> {
        self.games.find_active().await
    }

    /// Close the game and report final standings from its sheet.
    pub async fn finish(&self, id: &str, sheets: &SheetStore) -> Result<FinishedGame, DomainError> {
        let game = self.get(id).await?;
        if game.is_finished() {
            return Err(DomainError::conflict(
                ConflictKind::GameFinished,
                format!("Game {id} is already finished"),
            ));
        }
        let totals = sheets.close(&game)?;
        let game = match self.games.set_status(id, GameStatus::Finished).await {
            Ok(game) => game,
            Err(err) => {
                sheets.reopen(id);
                return Err(err);
            }
        };
        let leaders = leaders(&totals);
        info!(game_id = %game.id, ?totals, ?leaders, "game finished");
        Ok(FinishedGame {
            game,
            totals,
            leaders,
        })
    }
}

fn validate_roster(ids: &[String]) -> Result<(), DomainError> {
    if ids.len() < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoster,
            format!("a game needs at least {MIN_PLAYERS} players"),
        ));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoster,
            format!("player {dup} appears more than once"),
        ));
    }
    Ok(())
}
