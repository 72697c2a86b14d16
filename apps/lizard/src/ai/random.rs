//! Random bot: uniform estimates and uniformly chosen legal cards.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, Player};
use crate::domain::{legal_plays, Card};

/// Bot that estimates and plays at random.
///
/// The RNG sits behind a `Mutex` because `Player` methods take `&self`.
/// A seed makes every decision reproducible.
pub struct RandomBot {
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub const NAME: &'static str = "RandomBot";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl Player for RandomBot {
    fn estimate(&self, hand: &[Card]) -> Result<u8, AiError> {
        let max = u8::try_from(hand.len())
            .map_err(|_| AiError::Internal(format!("hand of {} cards", hand.len())))?;
        let mut rng = self.lock_rng()?;
        Ok(rng.random_range(0..=max))
    }

    fn play_card(&self, hand: &[Card], trick: &[Card]) -> Result<Card, AiError> {
        let legal = legal_plays(hand, trick);
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let mut rng = self.lock_rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
