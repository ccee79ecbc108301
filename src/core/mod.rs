//! Core engine types: players, RNG, configuration, state, events, errors.
//!
//! This module holds the data the rules operate on. All mutation of
//! `GameState` goes through `rules` and the `game` lifecycle.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{
    GameConfig, DECK_SIZE, FINAL_FIVE_POINTS, FINAL_FIVE_THRESHOLD, NORMAL_PAIR_POINTS, TOTAL_PAIRS,
};
pub use error::{EngineError, Result};
pub use event::GameEvent;
pub use state::{GameState, MoveRecord, Phase};
