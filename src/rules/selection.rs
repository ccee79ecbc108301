//! Selection controller: the per-turn flip state machine.
//!
//! A selection is accepted only when:
//! - the game is playing
//! - no pair is waiting to be resolved
//! - the card is in the deck, not matched, and not already face-up
//!
//! Anything else is ignored without touching state. Accepting the second
//! card of a turn takes the resolving lock; the caller schedules the
//! resolution.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardId;
use crate::core::state::{GameState, Phase};

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    NotPlaying,
    Resolving,
    UnknownCard,
    AlreadyMatched,
    AlreadyFaceUp,
}

/// Result of a `select_card` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// First card of the turn turned face-up.
    Revealed(CardId),
    /// Second card turned face-up; the pair is locked awaiting resolution.
    PairPending([CardId; 2]),
    /// Selection rejected; no state changed.
    Ignored(IgnoreReason),
}

impl Selection {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }
}

/// Check whether `id` may be selected right now.
pub fn check_selectable(state: &GameState, id: CardId) -> Result<(), IgnoreReason> {
    if state.phase != Phase::Playing {
        return Err(IgnoreReason::NotPlaying);
    }
    if state.resolving {
        return Err(IgnoreReason::Resolving);
    }
    if !state.contains(id) {
        return Err(IgnoreReason::UnknownCard);
    }
    if state.matched.contains(&id) {
        return Err(IgnoreReason::AlreadyMatched);
    }
    if state.flipped.contains(&id) {
        return Err(IgnoreReason::AlreadyFaceUp);
    }
    Ok(())
}

/// Apply a selection command.
pub fn select_card(state: &mut GameState, id: CardId) -> Selection {
    if let Err(reason) = check_selectable(state, id) {
        return Selection::Ignored(reason);
    }

    state.flipped.push(id);
    debug!(card = %id, player = %state.current_player, "card revealed");

    match state.flipped.as_slice() {
        &[first, second] => {
            state.resolving = true;
            Selection::PairPending([first, second])
        }
        _ => Selection::Revealed(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Face, Rank, Suit};

    fn playing() -> GameState {
        GameState::new(Deck::ordered())
    }

    fn id(rank: Rank, suit: Suit) -> CardId {
        CardId::new(rank, suit)
    }

    #[test]
    fn test_first_selection_reveals() {
        let mut state = playing();
        let a = id(Rank::Ace, Suit::Spades);

        assert_eq!(select_card(&mut state, a), Selection::Revealed(a));
        assert_eq!(state.flipped(), &[a]);
        assert_eq!(state.face(a), Face::FaceUp);
        assert!(!state.is_resolving());
    }

    #[test]
    fn test_second_selection_locks() {
        let mut state = playing();
        let a = id(Rank::Ace, Suit::Spades);
        let b = id(Rank::Ace, Suit::Hearts);

        select_card(&mut state, a);
        assert_eq!(select_card(&mut state, b), Selection::PairPending([a, b]));
        assert_eq!(state.flipped().len(), 2);
        assert!(state.is_resolving());
    }

    #[test]
    fn test_third_selection_ignored_while_resolving() {
        let mut state = playing();
        select_card(&mut state, id(Rank::Ace, Suit::Spades));
        select_card(&mut state, id(Rank::Two, Suit::Spades));

        let c = id(Rank::Three, Suit::Spades);
        assert_eq!(select_card(&mut state, c), Selection::Ignored(IgnoreReason::Resolving));
        assert_eq!(state.flipped().len(), 2);
        assert_eq!(state.face(c), Face::FaceDown);
    }

    #[test]
    fn test_reselecting_face_up_card_ignored() {
        let mut state = playing();
        let a = id(Rank::Ace, Suit::Spades);

        select_card(&mut state, a);
        assert_eq!(select_card(&mut state, a), Selection::Ignored(IgnoreReason::AlreadyFaceUp));
        assert_eq!(state.flipped(), &[a]);
        assert!(!state.is_resolving());
    }

    #[test]
    fn test_matched_card_ignored() {
        let mut state = playing();
        let a = id(Rank::Ace, Suit::Spades);
        state.matched.insert(a);
        state.matched.insert(id(Rank::Ace, Suit::Hearts));
        state.remaining_pairs -= 1;

        assert_eq!(select_card(&mut state, a), Selection::Ignored(IgnoreReason::AlreadyMatched));
        assert!(state.flipped().is_empty());
    }

    #[test]
    fn test_not_playing_ignored() {
        let mut idle = GameState::idle();
        let a = id(Rank::Ace, Suit::Spades);
        assert_eq!(select_card(&mut idle, a), Selection::Ignored(IgnoreReason::NotPlaying));

        let mut finished = playing();
        finished.phase = Phase::Finished;
        assert_eq!(select_card(&mut finished, a), Selection::Ignored(IgnoreReason::NotPlaying));
        assert!(finished.flipped().is_empty());
    }

    #[test]
    fn test_unknown_card_ignored() {
        let mut state = GameState::new(Deck::default());
        let a = id(Rank::Ace, Suit::Spades);

        assert_eq!(select_card(&mut state, a), Selection::Ignored(IgnoreReason::UnknownCard));
    }

    #[test]
    fn test_is_accepted() {
        let a = id(Rank::Ace, Suit::Spades);
        assert!(Selection::Revealed(a).is_accepted());
        assert!(Selection::PairPending([a, a]).is_accepted());
        assert!(!Selection::Ignored(IgnoreReason::Resolving).is_accepted());
    }
}
