//! Error codes for the Triunfo backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// Token is not a parseable JWT
    UnauthorizedMalformedJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request validation
    InvalidGameId,
    InvalidPlayerId,
    InvalidArgument,
    InvalidCell,
    InvalidRoster,
    InvalidRoundCount,
    InvalidName,
    InvalidEmail,
    InvalidGlyph,
    RoundOutOfRange,
    SeatOutOfRange,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource not found
    GameNotFound,
    PlayerNotFound,
    NotFound,

    // Conflicts
    UniqueEmail,
    GameFinished,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System errors
    DirectoryUnavailable,
    DirectoryTimeout,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedMalformedJwt => "UNAUTHORIZED_MALFORMED_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidCell => "INVALID_CELL",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::InvalidRoundCount => "INVALID_ROUND_COUNT",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidGlyph => "INVALID_GLYPH",
            Self::RoundOutOfRange => "ROUND_OUT_OF_RANGE",
            Self::SeatOutOfRange => "SEAT_OUT_OF_RANGE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::GameFinished => "GAME_FINISHED",
            Self::Conflict => "CONFLICT",

            Self::DirectoryUnavailable => "DIRECTORY_UNAVAILABLE",
            Self::DirectoryTimeout => "DIRECTORY_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
