//! Player directory contract.

use async_trait::async_trait;

use crate::entities::players::{NewPlayer, Player};
use crate::errors::domain::DomainError;

#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Insert a player. Fails with `ConflictKind::UniqueEmail` when the email
    /// is already registered.
    async fn create(&self, player: NewPlayer) -> Result<Player, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Player>, DomainError>;

    /// Case-insensitive substring match on the name, ordered by name.
    /// An empty fragment matches everyone.
    async fn search_by_name(&self, fragment: &str, limit: usize)
        -> Result<Vec<Player>, DomainError>;
}
