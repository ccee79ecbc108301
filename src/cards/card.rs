//! Card data: suits, ranks, identifiers, and the immutable `Card`.
//!
//! A card is identified by its (rank, suit) pair. Its text form is
//! `"<rank>-<suit>"`, e.g. `"A-spades"` or `"10-hearts"`.
//!
//! Matching ignores suit: two cards pair when their ranks share a
//! match value (Ace = 1 .. King = 13).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::EngineError;

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Suit colour, for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitColor {
    Red,
    Black,
}

impl Suit {
    /// All suits in deal order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Key used in card ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
            Suit::Spades | Suit::Clubs => SuitColor::Black,
        }
    }

    /// Readable name ("Spades").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// One of the thirteen ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
}

impl Rank {
    /// All ranks in ascending match value.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Match value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Short display and id key ("A", "10", "K").
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Rank::Ace => "A",
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
        }
    }

    /// Readable name ("Ace", "7", "Queen").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            other => other.key(),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// Unique card identifier: the (rank, suit) composite key.
///
/// ```
/// use rust_pairs::cards::{CardId, Rank, Suit};
///
/// let id: CardId = "Q-clubs".parse().unwrap();
/// assert_eq!(id, CardId::new(Rank::Queen, Suit::Clubs));
/// assert_eq!(id.to_string(), "Q-clubs");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub rank: Rank,
    pub suit: Suit,
}

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Match value of the card this id names.
    #[must_use]
    pub const fn match_value(self) -> u8 {
        self.rank.value()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank.key(), self.suit.key())
    }
}

impl FromStr for CardId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCardId(s.to_string());
        let (rank, suit) = s.split_once('-').ok_or_else(invalid)?;
        let rank = Rank::from_key(rank).ok_or_else(invalid)?;
        let suit = Suit::from_key(suit).ok_or_else(invalid)?;
        Ok(Self::new(rank, suit))
    }
}

/// Observable face state of a card on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Hidden and selectable.
    #[default]
    FaceDown,
    /// Revealed as part of the current selection.
    FaceUp,
    /// Permanently paired; never selectable again this game.
    Matched,
}

/// An immutable playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    /// Rank-derived pairing value (1-13), identical across suits.
    pub match_value: u8,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            suit,
            rank,
            match_value: rank.value(),
        }
    }

    /// Face label, e.g. "A♠" or "10♦".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.key(), self.suit.symbol())
    }

    /// Readable name, e.g. "Ace of Spades".
    #[must_use]
    pub fn readable(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.match_value == other.match_value
    }
}
