//! In-memory game simulator.
//!
//! Drives the pure round engine directly with bot players, without the game
//! service, store or locking. Every deal and every bot decision is derived from
//! one game seed, so a seed replays the same game.

use lizard::domain::{
    aggregate_player_wins, create_game, current_player_index, derive_bot_seed,
    derive_dealing_seed, game_score, make_estimate, open_trick, phase, play_card, round_score,
    start_next_round, trick_winners, with_current_round, DealMode, Game, Phase, PlayerId, Round,
};
use lizard::{AiError, BotKind, DomainError};
use tracing::debug;

/// Outcome of one simulated round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub round_no: u8,
    pub dealer: PlayerId,
    pub trump: Option<String>,
    pub estimates: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub scores: Vec<i32>,
}

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: Vec<i32>,
    pub rounds: Vec<RoundResult>,
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// A bot failed to decide.
    Bot(PlayerId, &'static str, AiError),
    /// The engine rejected a move or the game state was inconsistent.
    Domain(DomainError),
    /// Fewer bot kinds than seats.
    MissingSeat(PlayerId),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Bot(seat, action, err) => {
                write!(f, "Bot error (seat {seat}, {action}): {err}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::MissingSeat(seat) => write!(f, "No bot configured for seat {seat}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

/// Plays whole games for a fixed table of bots.
pub struct Simulator {
    bots: Vec<BotKind>,
    rounds: Option<u8>,
    ordered: bool,
}

impl Simulator {
    pub fn new(bots: Vec<BotKind>, rounds: Option<u8>, ordered: bool) -> Self {
        Self {
            bots,
            rounds,
            ordered,
        }
    }

    pub fn players(&self) -> usize {
        self.bots.len()
    }

    /// Simulate a complete game from `game_seed`.
    pub fn simulate_game(&self, game_seed: u64) -> Result<GameResult, SimulatorError> {
        let mut game = create_game(self.players(), self.rounds)?;
        let mut rounds = Vec::with_capacity(game.rounds_to_play as usize);

        for round_no in 1..=game.rounds_to_play {
            let mode = if self.ordered {
                DealMode::Ordered
            } else {
                DealMode::Seeded(derive_dealing_seed(game_seed, round_no))
            };
            game = start_next_round(&game, mode)?;
            game = self.play_round(game, game_seed)?;
            let round = game.require_current_round()?;
            rounds.push(summarize_round(round)?);
        }

        Ok(GameResult {
            final_scores: game_score(&game)?,
            rounds,
        })
    }

    /// Let every seat act until the current round is done.
    fn play_round(&self, game: Game, game_seed: u64) -> Result<Game, SimulatorError> {
        let mut round = game.require_current_round()?.clone();
        let mut decision: u64 = 0;

        loop {
            let round_phase = phase(&round)?;
            if round_phase == Phase::Done {
                break;
            }

            let seat = current_player_index(&round)?;
            let kind = self
                .bots
                .get(seat as usize)
                .copied()
                .ok_or(SimulatorError::MissingSeat(seat))?;
            let seed = derive_bot_seed(game_seed, round.number, seat).wrapping_add(decision);
            let bot = kind.make(Some(seed));
            let hand = round.hand(seat)?.to_vec();
            decision += 1;

            round = match round_phase {
                Phase::Estimation => {
                    let estimate = bot
                        .estimate(&hand)
                        .map_err(|e| SimulatorError::Bot(seat, "estimate", e))?;
                    debug!(round_no = round.number, seat, estimate, "Bot estimate");
                    make_estimate(&round, estimate as i32)?
                }
                Phase::Play => {
                    let trick = open_trick(&round)?;
                    let card = bot
                        .play_card(&hand, &trick)
                        .map_err(|e| SimulatorError::Bot(seat, "play", e))?;
                    debug!(round_no = round.number, seat, card = %card, "Bot play");
                    play_card(&round, card)?
                }
                Phase::Done => break,
            };
        }

        Ok(with_current_round(&game, round)?)
    }
}

fn summarize_round(round: &Round) -> Result<RoundResult, DomainError> {
    let winners = trick_winners(round)?;
    Ok(RoundResult {
        round_no: round.number,
        dealer: round.dealer_offset,
        trump: round.trump.map(|card| card.to_string()),
        estimates: round
            .player_estimates
            .iter()
            .map(|e| e.unwrap_or(0))
            .collect(),
        tricks_won: aggregate_player_wins(&winners, round.number_of_players),
        scores: round_score(round)?,
    })
}
