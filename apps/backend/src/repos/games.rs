//! Game directory contract.

use async_trait::async_trait;

use crate::entities::games::{Game, GameStatus, NewGame};
use crate::errors::domain::DomainError;

#[async_trait]
pub trait GameDirectory: Send + Sync {
    async fn create(&self, game: NewGame) -> Result<Game, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, DomainError>;

    /// Most recently created game still marked active.
    async fn find_active(&self) -> Result<Option<Game>, DomainError>;

    /// Fails with `NotFoundKind::Game` when the id is unknown.
    async fn set_status(&self, id: &str, status: GameStatus) -> Result<Game, DomainError>;
}
