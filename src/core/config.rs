//! Game configuration.
//!
//! The rules are fixed: one standard deck, two players, and a fixed scoring
//! table. Those values are constants. `GameConfig` only carries pacing, the
//! delays the presentation layer uses to let players see the second card
//! before the pair is resolved. Pacing never changes an outcome.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of suits in the deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 13;

/// Cards in a full deck.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Pairs to be found in one game.
pub const TOTAL_PAIRS: u32 = (DECK_SIZE / 2) as u32;

/// Points for a pair found while more than `FINAL_FIVE_THRESHOLD` remain.
pub const NORMAL_PAIR_POINTS: u32 = 1;

/// Points for each of the last `FINAL_FIVE_THRESHOLD` pairs.
pub const FINAL_FIVE_POINTS: u32 = 2;

/// Remaining-pair count at or below which the bonus applies.
pub const FINAL_FIVE_THRESHOLD: u32 = 5;

/// Default delay between the second reveal and the comparison.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(600);

/// Default delay between a mismatch announcement and turning the cards back.
pub const DEFAULT_CONCEAL_DELAY: Duration = Duration::from_millis(700);

/// Pacing configuration for a game session.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use rust_pairs::core::GameConfig;
///
/// let config = GameConfig::default().with_reveal_delay(Duration::from_millis(400));
/// assert_eq!(config.reveal_delay, Duration::from_millis(400));
///
/// let instant = GameConfig::instant();
/// assert!(instant.reveal_delay.is_zero());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Time both selected cards stay visible before they are compared.
    pub reveal_delay: Duration,

    /// Time a mismatched pair stays visible before it is turned back.
    pub conceal_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay: DEFAULT_REVEAL_DELAY,
            conceal_delay: DEFAULT_CONCEAL_DELAY,
        }
    }
}

impl GameConfig {
    /// Configuration with no display delays (tests, headless play).
    #[must_use]
    pub fn instant() -> Self {
        Self {
            reveal_delay: Duration::ZERO,
            conceal_delay: Duration::ZERO,
        }
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the conceal delay.
    #[must_use]
    pub fn with_conceal_delay(mut self, delay: Duration) -> Self {
        self.conceal_delay = delay;
        self
    }
}
