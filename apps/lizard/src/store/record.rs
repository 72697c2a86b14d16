use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ai::BotKind;
use crate::domain::Game;

/// Who drives a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "bot")]
pub enum SeatKind {
    /// Acts only through service calls.
    Human,
    /// Played automatically by the service.
    Bot(BotKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub kind: SeatKind,
}

impl Seat {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SeatKind::Human,
        }
    }

    pub fn bot(name: impl Into<String>, kind: BotKind) -> Self {
        Self {
            name: name.into(),
            kind: SeatKind::Bot(kind),
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, SeatKind::Bot(_))
    }
}

/// One human-readable line of the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
    pub message: String,
}

impl LogEntry {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            at: OffsetDateTime::now_utc(),
            message: message.into(),
        }
    }
}

/// Everything stored for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub game: Game,
    pub seats: Vec<Seat>,
    pub log: Vec<LogEntry>,
    /// Base seed for dealing and bots; `None` deals from OS entropy.
    pub seed: Option<u64>,
}

impl GameRecord {
    pub fn seat_name(&self, seat: u8) -> &str {
        self.seats
            .get(seat as usize)
            .map_or("?", |s| s.name.as_str())
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(LogEntry::now(message));
    }
}
