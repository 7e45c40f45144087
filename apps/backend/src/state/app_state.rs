use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::adapters::{MemoryGames, MemoryPlayers, RestDirectory};
use crate::config::{AppConfig, DirectoryConfig};
use crate::error::AppError;
use crate::repos::{GameDirectory, PlayerDirectory};
use crate::services::scoresheets::SheetStore;

/// Shared resources handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerDirectory>,
    pub games: Arc<dyn GameDirectory>,
    /// Live score grids, one per game
    pub sheets: Arc<SheetStore>,
    pub security: SecurityConfig,
    /// Directory backend name reported by the health check
    pub directory: &'static str,
}

impl AppState {
    /// State backed by in-process directories.
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self {
            players: Arc::new(MemoryPlayers::new()),
            games: Arc::new(MemoryGames::new()),
            sheets: Arc::new(SheetStore::new()),
            security,
            directory: "memory",
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let security = config.security();
        match &config.directory {
            DirectoryConfig::Memory => Ok(Self::in_memory(security)),
            DirectoryConfig::Rest { base_url, api_key } => {
                let rest = Arc::new(RestDirectory::new(base_url.clone(), api_key.clone())?);
                Ok(Self {
                    players: rest.clone(),
                    games: rest,
                    sheets: Arc::new(SheetStore::new()),
                    security,
                    directory: "rest",
                })
            }
        }
    }
}
