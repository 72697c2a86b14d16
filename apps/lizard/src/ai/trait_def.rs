//! Player capability trait.

use std::fmt;

use crate::domain::Card;
use crate::error::AppError;

/// Errors that can occur while a player decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// The player encountered an internal error
    Internal(String),
    /// The player has nothing it may do
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "player internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "player invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("Bot error: {err}"))
    }
}

/// Something that can sit at a seat and make decisions.
///
/// Players see only their own hand and the trick on the table. Callers check
/// the returned decision with the engine; a player is never trusted to be
/// legal.
pub trait Player: Send + Sync {
    /// How many tricks this player expects to win with `hand`.
    fn estimate(&self, hand: &[Card]) -> Result<u8, AiError>;

    /// Card to play from `hand` into `trick` (empty when leading).
    fn play_card(&self, hand: &[Card], trick: &[Card]) -> Result<Card, AiError>;
}
