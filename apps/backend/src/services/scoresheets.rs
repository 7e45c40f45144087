//! Live score grids, one per game, held in process memory.
//!
//! A grid is opened lazily the first time a cell of its game is written.
//! Reads of a game nobody has written to yet return a blank sheet without
//! allocating an entry in the store. Closing a grid and writing to it both
//! happen under the same map entry lock, so no write lands after the final
//! totals were taken.

use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::domain::{EntryField, RowView, Scoresheet};
use crate::entities::games::{Game, GameStatus};
use crate::entities::players::Player;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::GameDirectory;

#[derive(Debug)]
struct LiveSheet {
    sheet: Scoresheet,
    /// Set once final totals have been taken; no writes after that.
    closed: bool,
}

#[derive(Debug, Default)]
pub struct SheetStore {
    sheets: DashMap<String, LiveSheet>,
}

/// Sheet as returned to clients: the roster, labelled rows and live totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetView {
    pub game_id: String,
    pub status: GameStatus,
    pub total_rounds: u32,
    pub round_count: usize,
    pub players: Vec<Player>,
    pub rows: Vec<RowView>,
    pub totals: Vec<i64>,
}

impl SheetView {
    fn build(game: &Game, sheet: &Scoresheet, closed: bool) -> Self {
        let status = if closed {
            GameStatus::Finished
        } else {
            game.status
        };
        Self {
            game_id: game.id.clone(),
            status,
            total_rounds: game.total_rounds,
            round_count: game.round_count(),
            players: game.players.clone(),
            rows: sheet.rows(),
            totals: sheet.totals(),
        }
    }
}

fn open(game: &Game) -> Result<LiveSheet, DomainError> {
    let sheet = Scoresheet::new(game.players.len(), game.total_rounds)?;
    Ok(LiveSheet {
        sheet,
        closed: false,
    })
}

fn finished(game_id: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::GameFinished,
        format!("Game {game_id} is finished"),
    )
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, game: &Game) -> Result<SheetView, DomainError> {
        if let Some(live) = self.sheets.get(&game.id) {
            return Ok(SheetView::build(game, &live.sheet, live.closed));
        }
        let live = open(game)?;
        Ok(SheetView::build(game, &live.sheet, false))
    }

    /// Write one cell of a game's sheet. Finished or closed sheets are
    /// read-only.
    pub fn set_entry(
        &self,
        game: &Game,
        round: usize,
        seat: usize,
        field: EntryField,
        value: &str,
    ) -> Result<SheetView, DomainError> {
        if game.is_finished() {
            return Err(finished(&game.id));
        }
        let mut live = self
            .sheets
            .entry(game.id.clone())
            .or_try_insert_with(|| open(game))?;
        if live.closed {
            return Err(finished(&game.id));
        }
        let entry = live.sheet.set_entry(round, seat, field, value)?;
        debug!(
            game_id = %game.id,
            round,
            seat,
            field = ?field,
            bet = %entry.bet,
            result = %entry.result,
            "cell written"
        );
        Ok(SheetView::build(game, &live.sheet, false))
    }

    /// Stop accepting writes for `game` and return its final totals.
    /// A second close is a `GameFinished` conflict.
    pub fn close(&self, game: &Game) -> Result<Vec<i64>, DomainError> {
        let mut live = self
            .sheets
            .entry(game.id.clone())
            .or_try_insert_with(|| open(game))?;
        if live.closed {
            return Err(finished(&game.id));
        }
        live.closed = true;
        Ok(live.sheet.totals())
    }

    /// Undo `close` when the game could not be marked finished.
    pub fn reopen(&self, game_id: &str) {
        if let Some(mut live) = self.sheets.get_mut(game_id) {
            live.closed = false;
        }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Resolves game ids through the directory before touching the store.
pub struct ScoresheetService<'a> {
    games: &'a dyn GameDirectory,
    sheets: &'a SheetStore,
}

impl<'a> ScoresheetService<'a> {
    pub fn new(games: &'a dyn GameDirectory, sheets: &'a SheetStore) -> Self {
        Self { games, sheets }
    }

    async fn load(&self, game_id: &str) -> Result<Game, DomainError> {
        self.games
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found")))
    }

    pub async fn view(&self, game_id: &str) -> Result<SheetView, DomainError> {
        let game = self.load(game_id).await?;
        self.sheets.view(&game)
    }

    pub async fn record(
        &self,
        game_id: &str,
        round: usize,
        seat: usize,
        field: EntryField,
        value: &str,
    ) -> Result<SheetView, DomainError> {
        let game = self.load(game_id).await?;
        self.sheets.set_entry(&game, round, seat, field, value)
    }
}
