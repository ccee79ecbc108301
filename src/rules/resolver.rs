//! Match resolver.
//!
//! Runs once per completed pair of selections:
//!
//! 1. Look up both cards. If either is missing the resolution is aborted:
//!    the selection is cleared and the lock released, turn and scores
//!    untouched.
//! 2. Equal match values: award points to the current player, who keeps
//!    the turn. Both cards become permanently matched.
//! 3. Unequal: the pair stays face-up and locked. `conceal_pair` later turns
//!    it back, releases the lock, and passes the turn.
//!
//! The final-five bonus is decided by `remaining_pairs` before the
//! decrement, so the last five matches of a game score double.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::CardId;
use crate::core::config::{FINAL_FIVE_POINTS, FINAL_FIVE_THRESHOLD, NORMAL_PAIR_POINTS};
use crate::core::error::{EngineError, Result};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, MoveRecord};

/// What happened when a pending pair was compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Pair found. `remaining_pairs` is the count after this match.
    Matched {
        player: PlayerId,
        cards: [CardId; 2],
        points: u32,
        remaining_pairs: u32,
    },
    /// No pair; the cards await `conceal_pair`.
    Mismatched { player: PlayerId, cards: [CardId; 2] },
    /// Inconsistent selection; it was cleared.
    Aborted,
}

/// Points for a match made while `remaining_pairs` pairs are still unfound.
///
/// ```
/// use rust_pairs::rules::points_for_match;
///
/// assert_eq!(points_for_match(26), 1);
/// assert_eq!(points_for_match(6), 1);
/// assert_eq!(points_for_match(5), 2);
/// assert_eq!(points_for_match(1), 2);
/// ```
#[must_use]
pub const fn points_for_match(remaining_pairs: u32) -> u32 {
    if remaining_pairs <= FINAL_FIVE_THRESHOLD {
        FINAL_FIVE_POINTS
    } else {
        NORMAL_PAIR_POINTS
    }
}

fn pending_pair(state: &GameState) -> Result<[CardId; 2]> {
    match state.flipped.as_slice() {
        &[first, second] => Ok([first, second]),
        other => Err(EngineError::IncompleteSelection(other.len())),
    }
}

fn compare(state: &GameState) -> Result<([CardId; 2], bool)> {
    let cards = pending_pair(state)?;
    let first = state.card(cards[0])?;
    let second = state.card(cards[1])?;
    Ok((cards, first.pairs_with(second)))
}

/// Resolve the pending pair of selections.
pub fn resolve_pair(state: &mut GameState) -> Resolution {
    let (cards, is_match) = match compare(state) {
        Ok(compared) => compared,
        Err(err) => {
            warn!(error = %err, "aborting pair resolution");
            abort(state);
            return Resolution::Aborted;
        }
    };

    let player = state.current_player;

    if is_match {
        let points = points_for_match(state.remaining_pairs);
        state.scores[player] += points;
        state.matched.insert(cards[0]);
        state.matched.insert(cards[1]);
        state.remaining_pairs -= 1;
        state.flipped.clear();
        state.resolving = false;
        state.history.push_back(MoveRecord {
            player,
            cards,
            matched: true,
            points,
        });

        debug!(%player, points, remaining = state.remaining_pairs, "pair matched");

        Resolution::Matched {
            player,
            cards,
            points,
            remaining_pairs: state.remaining_pairs,
        }
    } else {
        state.history.push_back(MoveRecord {
            player,
            cards,
            matched: false,
            points: 0,
        });

        debug!(%player, first = %cards[0], second = %cards[1], "pair mismatched");

        Resolution::Mismatched { player, cards }
    }
}

/// Turn a mismatched pair face-down, release the lock, and pass the turn.
///
/// Returns the concealed cards and the player whose turn it now is, or
/// `None` if no mismatched pair is pending.
pub fn conceal_pair(state: &mut GameState) -> Option<([CardId; 2], PlayerId)> {
    if !state.resolving {
        return None;
    }
    let cards = match pending_pair(state) {
        Ok(cards) => cards,
        Err(err) => {
            warn!(error = %err, "nothing to conceal");
            abort(state);
            return None;
        }
    };

    state.flipped.clear();
    state.resolving = false;
    state.current_player = state.current_player.other();

    Some((cards, state.current_player))
}

/// Clear the selection and release the lock without touching turn or score.
pub fn abort(state: &mut GameState) {
    state.flipped.clear();
    state.resolving = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Face, Rank, Suit};
    use crate::rules::selection::select_card;

    fn id(rank: Rank, suit: Suit) -> CardId {
        CardId::new(rank, suit)
    }

    fn select_pair(state: &mut GameState, a: CardId, b: CardId) {
        select_card(state, a);
        select_card(state, b);
        assert!(state.is_resolving());
    }

    #[test]
    fn test_match_keeps_turn() {
        let mut state = GameState::new(Deck::ordered());
        let a = id(Rank::Ace, Suit::Spades);
        let b = id(Rank::Ace, Suit::Hearts);
        select_pair(&mut state, a, b);

        let resolution = resolve_pair(&mut state);

        assert_eq!(
            resolution,
            Resolution::Matched {
                player: PlayerId::ONE,
                cards: [a, b],
                points: 1,
                remaining_pairs: 25,
            }
        );
        assert_eq!(state.current_player(), PlayerId::ONE);
        assert_eq!(state.score(PlayerId::ONE), 1);
        assert_eq!(state.score(PlayerId::TWO), 0);
        assert_eq!(state.remaining_pairs(), 25);
        assert_eq!(state.face(a), Face::Matched);
        assert_eq!(state.face(b), Face::Matched);
        assert!(state.flipped().is_empty());
        assert!(!state.is_resolving());
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_mismatch_then_conceal_switches_turn() {
        let mut state = GameState::new(Deck::ordered());
        let k = id(Rank::King, Suit::Clubs);
        let q = id(Rank::Queen, Suit::Clubs);
        select_pair(&mut state, k, q);

        let resolution = resolve_pair(&mut state);
        assert_eq!(
            resolution,
            Resolution::Mismatched {
                player: PlayerId::ONE,
                cards: [k, q],
            }
        );

        // Still visible and locked until concealed
        assert_eq!(state.face(k), Face::FaceUp);
        assert!(state.is_resolving());
        assert_eq!(state.current_player(), PlayerId::ONE);

        assert_eq!(conceal_pair(&mut state), Some(([k, q], PlayerId::TWO)));
        assert_eq!(state.face(k), Face::FaceDown);
        assert_eq!(state.face(q), Face::FaceDown);
        assert!(!state.is_resolving());
        assert_eq!(state.current_player(), PlayerId::TWO);
        assert_eq!(state.score(PlayerId::ONE), 0);
        assert_eq!(state.score(PlayerId::TWO), 0);

        // Selectable again
        assert!(select_card(&mut state, k).is_accepted());
    }

    #[test]
    fn test_final_five_threshold() {
        let mut state = GameState::new(Deck::ordered());
        state.remaining_pairs = 6;

        select_pair(&mut state, id(Rank::Ace, Suit::Spades), id(Rank::Ace, Suit::Hearts));
        match resolve_pair(&mut state) {
            Resolution::Matched { points, .. } => assert_eq!(points, 1),
            other => panic!("expected match, got {other:?}"),
        }
        assert_eq!(state.remaining_pairs(), 5);

        select_pair(&mut state, id(Rank::Two, Suit::Spades), id(Rank::Two, Suit::Hearts));
        match resolve_pair(&mut state) {
            Resolution::Matched { points, .. } => assert_eq!(points, 2),
            other => panic!("expected match, got {other:?}"),
        }
        assert_eq!(state.score(PlayerId::ONE), 3);
    }

    #[test]
    fn test_abort_on_incomplete_selection() {
        let mut state = GameState::new(Deck::ordered());
        select_card(&mut state, id(Rank::Ace, Suit::Spades));

        assert_eq!(resolve_pair(&mut state), Resolution::Aborted);
        assert!(state.flipped().is_empty());
        assert!(!state.is_resolving());
        assert_eq!(state.current_player(), PlayerId::ONE);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_abort_on_unknown_card() {
        let mut state = GameState::new(Deck::ordered());
        state.flipped.push(id(Rank::Ace, Suit::Spades));
        state.flipped.push(id(Rank::Ace, Suit::Hearts));
        state.resolving = true;
        state.index.clear();

        assert_eq!(resolve_pair(&mut state), Resolution::Aborted);
        assert!(state.flipped().is_empty());
        assert!(!state.is_resolving());
        assert_eq!(state.score(PlayerId::ONE), 0);
        assert_eq!(state.remaining_pairs(), 26);
    }

    #[test]
    fn test_conceal_without_pending_pair() {
        let mut state = GameState::new(Deck::ordered());
        assert_eq!(conceal_pair(&mut state), None);
        assert_eq!(state.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_history_records_both_outcomes() {
        let mut state = GameState::new(Deck::ordered());
        let k = id(Rank::King, Suit::Clubs);
        let q = id(Rank::Queen, Suit::Clubs);
        select_pair(&mut state, k, q);
        resolve_pair(&mut state);
        conceal_pair(&mut state);

        let a = id(Rank::Ace, Suit::Spades);
        let b = id(Rank::Ace, Suit::Hearts);
        select_pair(&mut state, a, b);
        resolve_pair(&mut state);

        let history: Vec<_> = state.history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                MoveRecord { player: PlayerId::ONE, cards: [k, q], matched: false, points: 0 },
                MoveRecord { player: PlayerId::TWO, cards: [a, b], matched: true, points: 1 },
            ]
        );
    }
}
