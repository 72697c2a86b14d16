//! Domain-level error type returned by the rules engine.
//!
//! This error type is transport- and store-agnostic. Every engine operation
//! returns it as a value; a returned error never implies a mutation. The
//! service layer converts it into `crate::error::AppError` via the provided
//! `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::PlayerId;
use crate::domain::Card;

/// Validation failure kinds (caller-facing, actionable).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPlayerCount,
    InvalidRoundNumber,
    InvalidEstimate,
    OutOfTurn,
    PhaseMismatch,
    ParseCard,
    InvalidTrumpConversion,
    GameOver,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Seat,
    Other(String),
}

/// Diagnostics for a rejected card play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPlay {
    pub player: PlayerId,
    pub hand: Vec<Card>,
    pub trick: Vec<Card>,
    pub card: Card,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Illegal card for the current player, hand and trick
    InvalidPlay(Box<InvalidPlay>),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Internal invariant broken (query used outside its phase, corrupt round)
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::InvalidPlay(play) => {
                let hand: Vec<String> = play.hand.iter().map(ToString::to_string).collect();
                let trick: Vec<String> = play.trick.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "invalid play: player {} cannot play {} (hand [{}], trick [{}])",
                    play.player,
                    play.card,
                    hand.join(", "),
                    trick.join(", ")
                )
            }
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn invalid_play(player: PlayerId, hand: &[Card], trick: &[Card], card: Card) -> Self {
        Self::InvalidPlay(Box::new(InvalidPlay {
            player,
            hand: hand.to_vec(),
            trick: trick.to_vec(),
            card,
        }))
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
