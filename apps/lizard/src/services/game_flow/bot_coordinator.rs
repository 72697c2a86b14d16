use tracing::debug;

use super::player_actions::{apply_estimate, apply_play};
use super::GameService;
use crate::ai::BotKind;
use crate::domain::seed_derivation::derive_bot_seed;
use crate::domain::{current_player_index, game_phase, open_trick, phase, GamePhase, Phase};
use crate::error::AppError;
use crate::store::{GameRecord, SeatKind};

impl GameService {
    /// Let bot seats act until a human must, rolling finished rounds over.
    pub(super) fn advance(&self, record: &mut GameRecord) -> Result<(), AppError> {
        loop {
            let round = record.game.require_current_round()?;
            let round_phase = phase(round)?;
            if round_phase == Phase::Done {
                self.finish_round(record)?;
                if game_phase(&record.game)? == GamePhase::Done {
                    return Ok(());
                }
                continue;
            }

            let seat = current_player_index(round)?;
            let Some(kind) = bot_kind(record, seat) else {
                debug!(game_id = %record.id, seat, "Waiting for human seat");
                return Ok(());
            };

            let decision =
                round.player_estimates.iter().flatten().count() + round.moves.len().saturating_sub(1);
            let seed = record.seed.map(|s| {
                derive_bot_seed(s, round.number, seat).wrapping_add(decision as u64)
            });
            let bot = kind.make(seed);
            let hand = round.hand(seat)?.to_vec();

            match round_phase {
                Phase::Estimation => {
                    let estimate = bot.estimate(&hand)?;
                    apply_estimate(record, seat, estimate as i32)?;
                }
                Phase::Play => {
                    let trick = open_trick(round)?;
                    let card = bot.play_card(&hand, &trick)?;
                    apply_play(record, seat, card)?;
                }
                Phase::Done => {}
            }
        }
    }
}

fn bot_kind(record: &GameRecord, seat: u8) -> Option<BotKind> {
    match record.seats.get(seat as usize).map(|s| s.kind) {
        Some(SeatKind::Bot(kind)) => Some(kind),
        _ => None,
    }
}
