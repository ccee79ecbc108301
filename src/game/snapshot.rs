//! Read-out of everything the presentation layer displays.

use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::cards::{CardId, Face, SuitColor};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{GameState, Phase};
use crate::rules::GameOutcome;

/// One card as the table shows it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub label: String,
    pub readable: String,
    pub color: SuitColor,
    pub face: Face,
}

/// Point-in-time view of a game, in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub cards: Vec<CardView>,
    pub current_player: PlayerId,
    pub scores: PlayerMap<u32>,
    pub remaining_pairs: u32,
    pub resolving: bool,
    pub status: String,
    pub outcome: Option<GameOutcome>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(state: &GameState, status: &Status) -> Self {
        let cards = state
            .deck()
            .iter()
            .map(|card| CardView {
                id: card.id,
                label: card.label(),
                readable: card.readable(),
                color: card.suit.color(),
                face: state.face(card.id),
            })
            .collect();

        Self {
            phase: state.phase(),
            cards,
            current_player: state.current_player(),
            scores: state.scores().clone(),
            remaining_pairs: state.remaining_pairs(),
            resolving: state.is_resolving(),
            status: status.to_string(),
            outcome: state.outcome(),
        }
    }

    /// Number of cards currently showing a given face.
    #[must_use]
    pub fn count_faces(&self, face: Face) -> usize {
        self.cards.iter().filter(|c| c.face == face).count()
    }
}
