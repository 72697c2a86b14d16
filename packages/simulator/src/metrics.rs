//! Metrics collection for simulation results.

use serde::Serialize;

use crate::simulator::{GameResult, RoundResult};

/// One JSON line per simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub bots: Vec<String>,
    pub rounds_to_play: usize,
    pub ordered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    /// Every seat sharing the top score.
    pub winners: Vec<u8>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub dealer: u8,
    pub trump: Option<String>,
    pub estimates: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub scores: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub bot: String,
    pub total_score: i32,
    pub estimate_accuracy: EstimateAccuracy,
    pub avg_tricks_per_round: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EstimateAccuracy {
    pub exact: u32,
    /// Rounds where the seat won more tricks than it estimated.
    pub under: u32,
    /// Rounds where the seat won fewer tricks than it estimated.
    pub over: u32,
    pub exact_pct: f64,
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    bots: Vec<String>,
    ordered: bool,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = bots
        .iter()
        .enumerate()
        .map(|(seat, bot)| build_player_metrics(seat, bot, result))
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            bots,
            rounds_to_play: result.rounds.len(),
            ordered,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winners: winners(&result.final_scores),
            duration_ms,
        },
        rounds: result.rounds.iter().map(RoundMetrics::from).collect(),
        player_metrics,
    }
}

impl From<&RoundResult> for RoundMetrics {
    fn from(round: &RoundResult) -> Self {
        RoundMetrics {
            round_no: round.round_no,
            dealer: round.dealer,
            trump: round.trump.clone(),
            estimates: round.estimates.clone(),
            tricks_won: round.tricks_won.clone(),
            scores: round.scores.clone(),
        }
    }
}

fn build_player_metrics(seat: usize, bot: &str, result: &GameResult) -> PlayerMetrics {
    let mut accuracy = EstimateAccuracy::default();
    let mut tricks = 0u32;

    for round in &result.rounds {
        let estimate = round.estimates.get(seat).copied().unwrap_or(0);
        let won = round.tricks_won.get(seat).copied().unwrap_or(0);
        tricks += won as u32;
        match won.cmp(&estimate) {
            std::cmp::Ordering::Equal => accuracy.exact += 1,
            std::cmp::Ordering::Greater => accuracy.under += 1,
            std::cmp::Ordering::Less => accuracy.over += 1,
        }
    }

    let played = result.rounds.len();
    if played > 0 {
        accuracy.exact_pct = accuracy.exact as f64 / played as f64 * 100.0;
    }

    PlayerMetrics {
        seat: seat as u8,
        bot: bot.to_string(),
        total_score: result.final_scores.get(seat).copied().unwrap_or(0),
        estimate_accuracy: accuracy,
        avg_tricks_per_round: if played > 0 {
            tricks as f64 / played as f64
        } else {
            0.0
        },
    }
}

pub fn winners(scores: &[i32]) -> Vec<u8> {
    let Some(&best) = scores.iter().max() else {
        return Vec::new();
    };
    scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score == best)
        .map(|(seat, _)| seat as u8)
        .collect()
}

/// Aggregate over many games, printed at the end of a run.
#[derive(Debug, Clone)]
pub struct SeatSummary {
    pub games: u32,
    pub wins: u32,
    pub total_score: i64,
    pub min_score: i32,
    pub max_score: i32,
    pub exact_estimates: u32,
    pub rounds: u32,
}

impl Default for SeatSummary {
    fn default() -> Self {
        Self {
            games: 0,
            wins: 0,
            total_score: 0,
            min_score: i32::MAX,
            max_score: i32::MIN,
            exact_estimates: 0,
            rounds: 0,
        }
    }
}

impl SeatSummary {
    pub fn record(&mut self, player: &PlayerMetrics, won: bool, rounds: usize) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
        self.total_score += player.total_score as i64;
        self.min_score = self.min_score.min(player.total_score);
        self.max_score = self.max_score.max(player.total_score);
        self.exact_estimates += player.estimate_accuracy.exact;
        self.rounds += rounds as u32;
    }

    pub fn avg_score(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.games as f64
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64 * 100.0
    }

    pub fn exact_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.exact_estimates as f64 / self.rounds as f64 * 100.0
    }
}

/// Fold a run's per-game metrics into one summary per seat.
pub fn summarize(games: &[GameMetrics], players: usize) -> Vec<SeatSummary> {
    let mut seats = vec![SeatSummary::default(); players];
    for game in games {
        for player in &game.player_metrics {
            if let Some(summary) = seats.get_mut(player.seat as usize) {
                let won = game.result.winners.contains(&player.seat);
                summary.record(player, won, game.rounds.len());
            }
        }
    }
    seats
}
