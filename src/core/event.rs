//! Game events.
//!
//! Every state transition pushes one or more events. The presentation layer
//! drains them after each command or tick and updates what it shows;
//! the engine never reads anything back from it.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::CardId;
use crate::rules::GameOutcome;

/// Something observable that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt and all state reset.
    GameStarted,

    /// It is now `player`'s turn.
    TurnStarted { player: PlayerId },

    /// A card was turned face-up by a selection.
    CardRevealed { card: CardId, player: PlayerId },

    /// Two selected cards paired. `remaining_pairs` is the count after this match.
    PairMatched {
        player: PlayerId,
        cards: [CardId; 2],
        points: u32,
        remaining_pairs: u32,
    },

    /// Two selected cards did not pair; they stay visible until concealed.
    PairMismatched { player: PlayerId, cards: [CardId; 2] },

    /// A mismatched pair was turned face-down again.
    CardsConcealed { cards: [CardId; 2] },

    /// A pending resolution was abandoned and the selection cleared.
    ResolutionAborted,

    /// The last pair was found.
    GameFinished {
        outcome: GameOutcome,
        scores: PlayerMap<u32>,
    },
}

impl GameEvent {
    /// Does this event change any card's face?
    #[must_use]
    pub fn changes_faces(&self) -> bool {
        matches!(
            self,
            GameEvent::GameStarted
                | GameEvent::CardRevealed { .. }
                | GameEvent::PairMatched { .. }
                | GameEvent::CardsConcealed { .. }
                | GameEvent::ResolutionAborted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_changes_faces() {
        let card = CardId::new(Rank::Ace, Suit::Spades);
        assert!(GameEvent::CardRevealed { card, player: PlayerId::ONE }.changes_faces());
        assert!(GameEvent::ResolutionAborted.changes_faces());
        assert!(!GameEvent::TurnStarted { player: PlayerId::TWO }.changes_faces());
        assert!(!GameEvent::PairMismatched {
            player: PlayerId::ONE,
            cards: [card, CardId::new(Rank::King, Suit::Clubs)],
        }
        .changes_faces());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::PairMatched {
            player: PlayerId::TWO,
            cards: [
                CardId::new(Rank::Ace, Suit::Spades),
                CardId::new(Rank::Ace, Suit::Hearts),
            ],
            points: 2,
            remaining_pairs: 3,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
