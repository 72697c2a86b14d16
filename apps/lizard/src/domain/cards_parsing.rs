//! Card tokens: `<SUIT><RANK>` (e.g. "H10", "CA") plus "LIZARD" and "SNAKE".
//!
//! Ranks are written 2..10, J, Q, K, A. Parsing also accepts the numeric face
//! aliases 11..14 ("C14" == "CA"); formatting always emits the face letters.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const LIZARD_TOKEN: &str = "LIZARD";
pub const SNAKE_TOKEN: &str = "SNAKE";

impl Suit {
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Suit> {
        match ch {
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

impl Rank {
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_token(token: &str) -> Option<Rank> {
        match token {
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            // Reject signs and leading zeros so every card has exactly one
            // numeric spelling.
            digits if !digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit()) => {
                digits.parse::<u8>().ok().and_then(Rank::from_value)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => write!(f, "{}{}", suit.symbol(), rank.token()),
            Card::Lizard => f.write_str(LIZARD_TOKEN),
            Card::Snake => f.write_str(SNAKE_TOKEN),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        match s {
            LIZARD_TOKEN => return Ok(Card::Lizard),
            SNAKE_TOKEN => return Ok(Card::Snake),
            _ => {}
        }

        let mut chars = s.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_symbol)
            .ok_or_else(parse_err)?;
        let rank = Rank::from_token(chars.as_str()).ok_or_else(parse_err)?;
        Ok(Card::Suited { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns an error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
