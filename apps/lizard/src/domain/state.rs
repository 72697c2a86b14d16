use serde::{Deserialize, Serialize};

pub type PlayerId = u8; // 0..number_of_players

/// Phase of a single round, derived from its latest move.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Players declare how many tricks they expect to win.
    Estimation,
    /// Tricks are being played.
    Play,
    /// Every hand is empty.
    Done,
}

/// Phase of a whole game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    #[serde(rename = "IN-PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

/// Seat / turn math helpers for a table of `players` seats.
///
/// Clockwise is positive. Every layer (round engine, services, simulator)
/// uses these so rotation has one definition.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i16, players: usize) -> PlayerId {
    let n = players.max(1) as i16;
    ((seat as i16 + delta).rem_euclid(n)) as PlayerId
}

/// Returns the next player clockwise.
#[inline]
pub fn next_player(p: PlayerId, players: usize) -> PlayerId {
    seat_offset(p, 1, players)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: usize, players: usize) -> PlayerId {
    let players = players.max(1);
    ((start as usize + n) % players) as PlayerId
}

/// Dealer offset for a 1-based round number: `(round - 1) mod players`.
///
/// The dealer offset is also the seat that receives the first card, estimates
/// first, and leads the first trick.
#[inline]
pub fn dealer_for_round(round_no: u8, players: usize) -> PlayerId {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    (round_no.saturating_sub(1) as usize % players.max(1)) as PlayerId
}
