//! Final game outcome.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Strictly higher score.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameOutcome {
    /// Decide the outcome from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let one = scores[PlayerId::ONE];
        let two = scores[PlayerId::TWO];
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(PlayerId::ONE),
            std::cmp::Ordering::Less => GameOutcome::Winner(PlayerId::TWO),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameOutcome::Winner(p) if *p == player)
    }
}
