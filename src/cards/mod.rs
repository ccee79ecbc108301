//! Card system: suits, ranks, card identity, and the deck builder.
//!
//! ## Key Types
//!
//! - `CardId`: (rank, suit) composite key, text form `"A-spades"`
//! - `Card`: Immutable card data with its match value
//! - `Face`: Observable face state on the table
//! - `Deck`: The 52-card layout, shuffled per game

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Face, Rank, Suit, SuitColor};
pub use deck::Deck;
