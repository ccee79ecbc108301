//! Engine error types.
//!
//! Illegal selections are not errors; they come back as
//! `Selection::Ignored`. The variants here cover card-id parsing and the
//! internal consistency checks the resolver recovers from.

use thiserror::Error;

use crate::cards::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("card not in the current deck: {0}")]
    UnknownCard(CardId),

    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),

    #[error("expected two selected cards, found {0}")]
    IncompleteSelection(usize),
}

pub type Result<T> = std::result::Result<T, EngineError>;
