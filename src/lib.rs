//! # rust-pairs
//!
//! A two-player card-matching (concentration) game engine.
//!
//! Fifty-two cards are dealt face-down. Players take turns turning over two
//! cards; equal ranks are a pair. Finding a pair scores and keeps the turn,
//! missing passes it. The last five pairs of a game are worth double.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `GameState` per game, owned by the `Game`
//!    session. All mutation goes through `start_game` and `select_card`.
//!
//! 2. **Cooperative Scheduling**: Resolution runs after a display delay via
//!    a `Scheduler`. The resolving lock keeps pairs from interleaving.
//!    Tests swap in `ImmediateScheduler` or a `ManualClock`.
//!
//! 3. **Presentation Agnostic**: The engine speaks in `CardId`s and emits
//!    `GameEvent`s; rendering and input live outside.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, state, events, errors
//! - `cards`: Suits, ranks, card identity, deck builder
//! - `rules`: Selection controller, match resolver, outcome
//! - `scheduler`: Delayed task queues and clocks
//! - `game`: Lifecycle, status text, snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod scheduler;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameEvent, GameRng, GameState, MoveRecord, Phase, PlayerId, PlayerMap,
    EngineError, Result,
};

pub use crate::cards::{Card, CardId, Deck, Face, Rank, Suit, SuitColor};

pub use crate::rules::{GameOutcome, IgnoreReason, Resolution, Selection};

pub use crate::scheduler::{
    Clock, ImmediateScheduler, ManualClock, ScheduledTask, Scheduler, SystemClock, TaskKind,
    TimerQueue,
};

pub use crate::game::{CardView, Game, Snapshot, Status};
