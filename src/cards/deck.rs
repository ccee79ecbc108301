//! Deck construction and shuffling.
//!
//! `Deck::build` produces every (rank, suit) combination exactly once,
//! then shuffles with `GameRng::shuffle` (Fisher-Yates).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit};
use crate::core::config::DECK_SIZE;
use crate::core::rng::GameRng;

/// An ordered table layout of cards.
///
/// A built deck always holds all 52 cards. The default deck is empty and
/// stands in for "no game dealt yet".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full deck and shuffle it.
    ///
    /// ```
    /// use rust_pairs::cards::Deck;
    /// use rust_pairs::core::GameRng;
    ///
    /// let deck = Deck::build(&mut GameRng::new(42));
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a full deck in suit-major, rank-ascending order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a table position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids in table order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Map from card id to table position.
    #[must_use]
    pub fn index(&self) -> FxHashMap<CardId, usize> {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, card)| (card.id, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ordered_deck_is_complete() {
        let deck = Deck::ordered();
        assert_eq!(deck.len(), 52);

        let ids: HashSet<_> = deck.ids().collect();
        assert_eq!(ids.len(), 52);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(ids.contains(&CardId::new(rank, suit)));
            }
        }
    }

    #[test]
    fn test_four_cards_per_match_value() {
        let deck = Deck::ordered();
        for rank in Rank::ALL {
            let count = deck.iter().filter(|c| c.match_value == rank.value()).count();
            assert_eq!(count, 4);
        }
    }

    #[test]
    fn test_build_is_permutation() {
        let deck = Deck::build(&mut GameRng::new(42));
        assert_eq!(deck.len(), 52);

        let mut shuffled: Vec<_> = deck.ids().collect();
        let mut ordered: Vec<_> = Deck::ordered().ids().collect();
        assert_ne!(shuffled, ordered);

        shuffled.sort();
        ordered.sort();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Deck::build(&mut GameRng::new(7));
        let b = Deck::build(&mut GameRng::new(7));
        let c = Deck::build(&mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_index_matches_positions() {
        let deck = Deck::build(&mut GameRng::new(1));
        let index = deck.index();

        assert_eq!(index.len(), 52);
        for (position, card) in deck.iter().enumerate() {
            assert_eq!(index[&card.id], position);
            assert_eq!(deck.get(position), Some(card));
        }
    }

    #[test]
    fn test_default_deck_is_empty() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert!(deck.index().is_empty());
        assert_eq!(deck.get(0), None);
    }
}
