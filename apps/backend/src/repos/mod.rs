//! Directory seams. The backend never owns player or game storage; these
//! traits are implemented by the adapters in `crate::adapters`.

pub mod games;
pub mod players;

pub use games::GameDirectory;
pub use players::PlayerDirectory;
