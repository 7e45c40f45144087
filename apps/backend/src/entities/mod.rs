//! Records owned by the external player and game directories.

pub mod games;
pub mod players;

pub use games::{Game, GameStatus, NewGame};
pub use players::{NewPlayer, Player};
