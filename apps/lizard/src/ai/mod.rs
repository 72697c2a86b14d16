//! Automated players.
//!
//! - `Player`: the capability every seat driver implements
//! - `RandomBot`: random estimates and random legal cards (seedable)
//! - `MockPlayer`: deterministic, for tests and fixtures
//! - `registry`: construct a player by `BotKind`

mod mock;
mod random;
pub mod registry;
mod trait_def;

pub use mock::MockPlayer;
pub use random::RandomBot;
pub use registry::BotKind;
pub use trait_def::{AiError, Player};
