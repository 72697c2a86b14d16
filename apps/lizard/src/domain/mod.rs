//! Domain layer: the pure rules engine.
//!
//! Every operation takes a value and returns a new value or a `DomainError`.
//! Nothing here performs I/O or holds shared state.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod estimates;
pub mod game;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod turn_order;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit, is_legal_play, legal_plays, winning_index};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit, Trump};
pub use deck::{build_deck, DealMode};
pub use estimates::make_estimate;
pub use game::{create_game, game_phase, game_score, start_next_round, with_current_round, Game};
pub use round::{create_round, create_round_from_deck, current_trick, open_trick, phase, Move, Round};
pub use scoring::round_score;
pub use seed_derivation::{derive_bot_seed, derive_dealing_seed};
pub use snapshot::{round_snapshot, RoundSnapshot};
pub use state::{GamePhase, Phase, PlayerId};
pub use tricks::play_card;
pub use turn_order::{aggregate_player_wins, current_player_index, trick_winners};
