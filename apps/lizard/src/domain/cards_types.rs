//! Core card-related types: Card, Rank, Suit, Trump

use crate::errors::domain::{DomainError, ValidationKind};

/// Suits in deck-creation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Spades, Suit::Diamonds];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
    NoTrumps,
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Hearts => Trump::Hearts,
            Suit::Clubs => Trump::Clubs,
            Suit::Spades => Trump::Spades,
            Suit::Diamonds => Trump::Diamonds,
        }
    }
}

/// The trump card drawn after dealing decides the trump suit. A wild card, or
/// no card at all (deck exhausted), leaves the trick's first card in command.
impl From<Option<Card>> for Trump {
    fn from(card: Option<Card>) -> Self {
        match card.and_then(|c| c.suit()) {
            Some(suit) => Trump::from(suit),
            None => Trump::NoTrumps,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::Spades => Ok(Suit::Spades),
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::NoTrumps => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Cannot convert NoTrumps to Suit",
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2..=14 (J=11, Q=12, K=13, A=14).
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            2..=14 => Some(Rank::ALL[(value - 2) as usize]),
            _ => None,
        }
    }
}

/// A playing card. The deck holds 52 suited cards plus four of each wild.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Card {
    Suited { suit: Suit, rank: Rank },
    /// Always wins; the first lizard of a trick beats everything after it.
    Lizard,
    /// Always loses, unless every card of the trick is a snake.
    Snake,
}

impl Card {
    pub const fn suited(suit: Suit, rank: Rank) -> Self {
        Card::Suited { suit, rank }
    }

    /// Suit of a suited card; wild cards have none.
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(*suit),
            Card::Lizard | Card::Snake => None,
        }
    }

    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(*rank),
            Card::Lizard | Card::Snake => None,
        }
    }

    pub const fn is_wild(&self) -> bool {
        matches!(self, Card::Lizard | Card::Snake)
    }

    pub fn follows(&self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}
