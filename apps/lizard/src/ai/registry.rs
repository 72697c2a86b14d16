//! Registered bot kinds.
//!
//! Each entry pairs a stable name with a constructor taking an optional seed.
//! Same seed gives the same decisions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ai::{MockPlayer, Player, RandomBot};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    Random,
    Mock,
}

impl BotKind {
    pub const ALL: [BotKind; 2] = [BotKind::Random, BotKind::Mock];

    pub const fn as_str(self) -> &'static str {
        match self {
            BotKind::Random => "random",
            BotKind::Mock => "mock",
        }
    }

    pub fn make(self, seed: Option<u64>) -> Box<dyn Player> {
        (factory(self).make)(seed)
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BotKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::Other("UNKNOWN_BOT".into()),
                    format!("Unknown bot kind: {s}"),
                )
            })
    }
}

/// Factory definition for constructing players.
pub struct BotFactory {
    pub kind: BotKind,
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn Player>,
}

static BOT_FACTORIES: &[BotFactory] = &[
    BotFactory {
        kind: BotKind::Random,
        name: RandomBot::NAME,
        version: RandomBot::VERSION,
        make: make_random_bot,
    },
    BotFactory {
        kind: BotKind::Mock,
        name: MockPlayer::NAME,
        version: MockPlayer::VERSION,
        make: make_mock_player,
    },
];

pub fn registered_bots() -> &'static [BotFactory] {
    BOT_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static BotFactory> {
    registered_bots().iter().find(|f| f.name == name)
}

fn factory(kind: BotKind) -> &'static BotFactory {
    match kind {
        BotKind::Random => &BOT_FACTORIES[0],
        BotKind::Mock => &BOT_FACTORIES[1],
    }
}

fn make_random_bot(seed: Option<u64>) -> Box<dyn Player> {
    Box::new(RandomBot::new(seed))
}

fn make_mock_player(_seed: Option<u64>) -> Box<dyn Player> {
    Box::new(MockPlayer::new())
}
