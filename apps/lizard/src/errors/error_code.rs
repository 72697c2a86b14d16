//! Error codes for the Lizard game engine.
//!
//! This module defines all error codes used throughout the service layer.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in serialized error payloads.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player count outside 3..=5
    InvalidPlayerCount,
    /// Round number outside the playable range
    InvalidRoundNumber,
    /// Estimate out of range
    InvalidEstimate,
    /// Card may not be played now
    InvalidPlay,
    /// Not the caller's turn
    OutOfTurn,
    /// Action does not match the round phase
    PhaseMismatch,
    /// Parse card error
    ParseCard,
    /// Invalid trump conversion
    InvalidTrumpConversion,
    /// Action on a finished game
    GameOver,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Seat not found
    SeatNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Generic conflict
    Conflict,

    // System Errors
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
    /// Broken engine invariant
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidRoundNumber => "INVALID_ROUND_NUMBER",
            Self::InvalidEstimate => "INVALID_ESTIMATE",
            Self::InvalidPlay => "INVALID_PLAY",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidTrumpConversion => "INVALID_TRUMP_CONVERSION",
            Self::GameOver => "GAME_OVER",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::SeatNotFound => "SEAT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::Conflict => "CONFLICT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
