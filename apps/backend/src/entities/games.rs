use serde::{Deserialize, Serialize};

use super::players::Player;
use crate::domain::rules::round_count_for_peak;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Finished,
}

/// A game as held by the game directory.
///
/// `total_rounds` is the peak deal size; the game is played over
/// `2 * total_rounds - 1` rounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub players: Vec<Player>,
    pub total_rounds: u32,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Game {
    pub fn round_count(&self) -> usize {
        round_count_for_peak(self.total_rounds).unwrap_or(0)
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

/// Insert payload for the game directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub players: Vec<Player>,
    pub total_rounds: u32,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
