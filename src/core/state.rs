//! Game state: the single authoritative record of one game.
//!
//! ## GameState
//!
//! - Phase (idle, playing, finished)
//! - The dealt deck and an id → position index
//! - Current selection (0-2 face-up, unmatched cards)
//! - Matched card ids (grows monotonically within a game)
//! - Active player, scores, remaining pair count
//! - The resolving lock
//! - History of resolved pairs
//!
//! State is created fresh by every `start_game` and mutated only by the
//! selection controller and match resolver in `rules`.

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::TOTAL_PAIRS;
use super::error::{EngineError, Result};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, CardId, Deck, Face};
use crate::rules::GameOutcome;

/// Game lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game dealt yet.
    #[default]
    Idle,
    /// Selections are accepted.
    Playing,
    /// All pairs found; terminal until the next start.
    Finished,
}

/// One resolved pair of selections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub cards: [CardId; 2],
    pub matched: bool,
    /// Points awarded (0 for a mismatch).
    pub points: u32,
}

/// Complete state of one game.
///
/// Uses `im` persistent structures for the growing sets so snapshots clone cheaply.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) deck: Deck,
    pub(crate) index: FxHashMap<CardId, usize>,
    pub(crate) flipped: SmallVec<[CardId; 2]>,
    pub(crate) matched: ImHashSet<CardId>,
    pub(crate) current_player: PlayerId,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) remaining_pairs: u32,
    pub(crate) resolving: bool,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}

impl GameState {
    /// State before any game has been dealt.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            deck: Deck::default(),
            index: FxHashMap::default(),
            flipped: SmallVec::new(),
            matched: ImHashSet::new(),
            current_player: PlayerId::ONE,
            scores: PlayerMap::default(),
            remaining_pairs: TOTAL_PAIRS,
            resolving: false,
            outcome: None,
            history: Vector::new(),
        }
    }

    /// Fresh playing state over a dealt deck. Player 1 moves first.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let index = deck.index();
        Self {
            phase: Phase::Playing,
            deck,
            index,
            ..Self::idle()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Look up a card in the current deck.
    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.index
            .get(&id)
            .and_then(|&position| self.deck.get(position))
            .ok_or(EngineError::UnknownCard(id))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Currently selected cards, in selection order.
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    #[must_use]
    pub fn matched(&self) -> &ImHashSet<CardId> {
        &self.matched
    }

    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    /// Face state of a card. Cards not in the deck read as face-down.
    #[must_use]
    pub fn face(&self, id: CardId) -> Face {
        if self.matched.contains(&id) {
            Face::Matched
        } else if self.flipped.contains(&id) {
            Face::FaceUp
        } else {
            Face::FaceDown
        }
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> u32 {
        self.remaining_pairs
    }

    /// True while a pair of selections is waiting to be resolved.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// Final outcome; `Some` only once the game is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Every resolved pair of this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every card in the deck has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    /// Check the structural invariants:
    /// - `matched.len() == 2 * (TOTAL_PAIRS - remaining_pairs)`
    /// - at most two flipped cards, two only while resolving
    /// - flipped cards are never matched
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let matched_ok = self.remaining_pairs <= TOTAL_PAIRS
            && self.matched.len() == 2 * (TOTAL_PAIRS - self.remaining_pairs) as usize;
        let flipped_ok = self.flipped.len() < 2 || (self.flipped.len() == 2 && self.resolving);
        let disjoint = self.flipped.iter().all(|id| !self.matched.contains(id));
        matched_ok && flipped_ok && disjoint
    }
}
