//! Player domain service.

use lazy_regex::regex_is_match;
use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::entities::players::{NewPlayer, Player};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::PlayerDirectory;

pub const MAX_NAME_CHARS: usize = 32;
pub const MAX_GLYPH_CHARS: usize = 8;
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const MAX_SEARCH_LIMIT: usize = 50;

pub struct PlayerService<'a> {
    directory: &'a dyn PlayerDirectory,
}

impl<'a> PlayerService<'a> {
    pub fn new(directory: &'a dyn PlayerDirectory) -> Self {
        Self { directory }
    }

    /// Validate and normalise the input, then register the player.
    pub async fn create(&self, input: NewPlayer) -> Result<Player, DomainError> {
        let player = NewPlayer {
            name: normalize_name(&input.name)?,
            emoji: normalize_glyph(input.emoji.as_deref())?,
            email: normalize_email(input.email.as_deref())?,
        };
        let created = self.directory.create(player).await?;
        info!(player_id = %created.id, "player created");
        Ok(created)
    }

    pub async fn get(&self, id: &str) -> Result<Player, DomainError> {
        self.directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found")))
    }

    /// Name substring search. The query is normalised like stored names;
    /// the limit is clamped to `1..=MAX_SEARCH_LIMIT`.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<Player>, DomainError> {
        let fragment: String = query.trim().nfc().collect();
        let limit = limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        self.directory.search_by_name(&fragment, limit).await
    }
}

/// NFC-normalised, trimmed, 1 to 32 characters, no control characters.
pub fn normalize_name(raw: &str) -> Result<String, DomainError> {
    let name: String = raw.trim().nfc().collect();
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            format!("name must be between 1 and {MAX_NAME_CHARS} characters"),
        ));
    }
    if name.chars().any(char::is_control) {
        return Err(DomainError::validation(
            ValidationKind::InvalidName,
            "name must not contain control characters",
        ));
    }
    Ok(name)
}

/// Optional contact address; blank means absent. Stored lower-cased.
pub fn normalize_email(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(email) = raw.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(None);
    };
    if !regex_is_match!(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", email) {
        return Err(DomainError::validation(
            ValidationKind::InvalidEmail,
            format!("{email:?} is not a valid email address"),
        ));
    }
    Ok(Some(email.to_lowercase()))
}

/// Optional avatar glyph; blank means absent. Up to 8 code points so joined
/// emoji sequences fit.
pub fn normalize_glyph(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let Some(glyph) = raw.map(str::trim).filter(|g| !g.is_empty()) else {
        return Ok(None);
    };
    if glyph.chars().count() > MAX_GLYPH_CHARS
        || glyph.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(DomainError::validation(
            ValidationKind::InvalidGlyph,
            "avatar must be a single emoji or symbol",
        ));
    }
    Ok(Some(glyph.to_string()))
}
