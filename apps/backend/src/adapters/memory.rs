//! In-process directories. Default backend for local runs and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use ulid::Ulid;

use crate::entities::games::{Game, GameStatus, NewGame};
use crate::entities::players::{NewPlayer, Player};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::{GameDirectory, PlayerDirectory};

#[derive(Debug, Default)]
pub struct MemoryPlayers {
    players: RwLock<Vec<Player>>,
}

impl MemoryPlayers {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerDirectory for MemoryPlayers {
    async fn create(&self, player: NewPlayer) -> Result<Player, DomainError> {
        let mut players = self.players.write();

        if let Some(email) = &player.email {
            let taken = players
                .iter()
                .filter_map(|p| p.email.as_deref())
                .any(|existing| existing.eq_ignore_ascii_case(email));
            if taken {
                return Err(DomainError::conflict(
                    ConflictKind::UniqueEmail,
                    format!("email {email} is already registered"),
                ));
            }
        }

        let created = Player {
            id: Ulid::new().to_string(),
            name: player.name,
            emoji: player.emoji,
            email: player.email,
        };
        players.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, DomainError> {
        Ok(self.players.read().iter().find(|p| p.id == id).cloned())
    }

    async fn search_by_name(
        &self,
        fragment: &str,
        limit: usize,
    ) -> Result<Vec<Player>, DomainError> {
        let needle = fragment.to_lowercase();
        let mut found: Vec<Player> = self
            .players
            .read()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by_cached_key(|p| p.name.to_lowercase());
        found.truncate(limit);
        Ok(found)
    }
}

/// Games in creation order.
#[derive(Debug, Default)]
pub struct MemoryGames {
    games: RwLock<Vec<Game>>,
}

impl MemoryGames {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameDirectory for MemoryGames {
    async fn create(&self, game: NewGame) -> Result<Game, DomainError> {
        let created = Game {
            id: Ulid::new().to_string(),
            players: game.players,
            total_rounds: game.total_rounds,
            status: game.status,
            created_by: game.created_by,
        };
        self.games.write().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, DomainError> {
        Ok(self.games.read().iter().find(|g| g.id == id).cloned())
    }

    async fn find_active(&self) -> Result<Option<Game>, DomainError> {
        Ok(self
            .games
            .read()
            .iter()
            .rev()
            .find(|g| g.status == GameStatus::Active)
            .cloned())
    }

    async fn set_status(&self, id: &str, status: GameStatus) -> Result<Game, DomainError> {
        let mut games = self.games.write();
        let game = games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")))?;
        game.status = status;
        Ok(game.clone())
    }
}
