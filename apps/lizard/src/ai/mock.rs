//! Deterministic bot for tests and fixtures.

use super::trait_def::{AiError, Player};
use crate::domain::{legal_plays, Card};

/// Estimates one trick (never more than it holds) and plays the first legal
/// card in hand order.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPlayer;

impl MockPlayer {
    pub const NAME: &'static str = "MockPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn new() -> Self {
        Self
    }
}

impl Player for MockPlayer {
    fn estimate(&self, hand: &[Card]) -> Result<u8, AiError> {
        Ok(u8::from(!hand.is_empty()))
    }

    fn play_card(&self, hand: &[Card], trick: &[Card]) -> Result<Card, AiError> {
        legal_plays(hand, trick)
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }
}
