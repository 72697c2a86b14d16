//! Seed derivation for reproducible games.
//!
//! A game carries one base seed. Every round's deal and every bot decision
//! gets its own seed derived from it, so replaying a game with the same base
//! seed reproduces every shuffle and every bot choice.

/// Seed for shuffling the deck of a round.
pub fn derive_dealing_seed(game_seed: u64, round_no: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for a bot's decisions in one round.
///
/// Unique per (game, round, seat). Uses a different multiplier and offset from
/// dealing so the two streams never share a seed.
pub fn derive_bot_seed(game_seed: u64, round_no: u8, seat: u8) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
