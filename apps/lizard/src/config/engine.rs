//! Engine configuration loaded from the environment.
//!
//! - `LIZARD_DEAL_MODE`: `shuffled` (default) or `ordered`
//! - `LIZARD_SEED`: base seed for every game that does not bring its own
//! - `LIZARD_DEFAULT_ROUNDS`: rounds to play when a game does not say

use std::env;

use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::DealMode;
use crate::error::AppError;

/// How decks are prepared before each deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealStyle {
    #[default]
    Shuffled,
    /// Creation order, for fixtures and reproducible demos.
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub deal_style: DealStyle,
    pub seed: Option<u64>,
    pub default_rounds: Option<u8>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            deal_style: deal_style()?,
            seed: optional_parse("LIZARD_SEED")?,
            default_rounds: optional_parse("LIZARD_DEFAULT_ROUNDS")?,
        })
    }

    pub fn ordered() -> Self {
        Self {
            deal_style: DealStyle::Ordered,
            ..Self::default()
        }
    }

    /// Deal mode for round `round_no` of a game with base seed `game_seed`.
    pub fn deal_mode(&self, game_seed: Option<u64>, round_no: u8) -> DealMode {
        match (self.deal_style, game_seed) {
            (DealStyle::Ordered, _) => DealMode::Ordered,
            (DealStyle::Shuffled, Some(seed)) => DealMode::Seeded(derive_dealing_seed(seed, round_no)),
            (DealStyle::Shuffled, None) => DealMode::Random,
        }
    }
}

fn deal_style() -> Result<DealStyle, AppError> {
    match env::var("LIZARD_DEAL_MODE") {
        Err(_) => Ok(DealStyle::default()),
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "" | "shuffled" => Ok(DealStyle::Shuffled),
            "ordered" => Ok(DealStyle::Ordered),
            other => Err(AppError::config(format!(
                "LIZARD_DEAL_MODE must be 'shuffled' or 'ordered', got '{other}'"
            ))),
        },
    }
}

fn optional_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| AppError::config(format!("Environment variable '{name}' has invalid value '{trimmed}'")))
}
