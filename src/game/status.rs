//! Human-readable status line.
//!
//! The engine keeps one status value and updates it on every announced
//! transition. Presentation layers render it with `Display`.

use serde::{Deserialize, Serialize};

use crate::core::player::{PlayerId, PlayerMap};
use crate::rules::GameOutcome;

/// Current informational announcement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// No game started yet.
    #[default]
    AwaitingStart,
    /// Announce whose turn it is.
    Turn(PlayerId),
    /// A pair was found.
    Matched { player: PlayerId, points: u32 },
    /// The selected cards did not pair.
    Mismatched,
    /// Final result.
    Finished {
        outcome: GameOutcome,
        scores: PlayerMap<u32>,
    },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::AwaitingStart => write!(f, "Press start to begin the game."),
            Status::Turn(player) => write!(f, "{player}'s turn."),
            Status::Matched { player, points } => {
                let unit = if *points == 1 { "point" } else { "points" };
                write!(f, "Pair! {player} scores {points} {unit}.")
            }
            Status::Mismatched => write!(f, "No match. Turning the cards back over."),
            Status::Finished { outcome, scores } => match outcome {
                GameOutcome::Winner(winner) => write!(
                    f,
                    "Game over! {winner} wins ({} to {}).",
                    scores[*winner],
                    scores[winner.other()]
                ),
                GameOutcome::Draw => write!(
                    f,
                    "Game over! It's a draw ({} to {}).",
                    scores[PlayerId::ONE],
                    scores[PlayerId::TWO]
                ),
            },
        }
    }
}
