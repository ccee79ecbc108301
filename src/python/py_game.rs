//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardId, Face};
use crate::core::{GameConfig, GameRng, Phase, PlayerId};
use crate::game::Game;
use crate::rules::GameOutcome;
use crate::scheduler::{SystemClock, TimerQueue};

fn parse_card(id: &str) -> PyResult<CardId> {
    id.parse::<CardId>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Playing => "playing",
        Phase::Finished => "finished",
    }
}

fn face_name(face: Face) -> &'static str {
    match face {
        Face::FaceDown => "face-down",
        Face::FaceUp => "face-up",
        Face::Matched => "matched",
    }
}

/// Python wrapper for a real-time game session.
///
/// Call `tick()` from the UI loop to run resolutions whose display delay
/// has elapsed.
#[pyclass(name = "PairGame")]
pub struct PyPairGame {
    game: Game<TimerQueue<SystemClock>>,
}

#[pymethods]
impl PyPairGame {
    /// Create an idle session.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible deal; random when omitted
    /// - reveal_delay_ms: time both cards stay visible before comparison
    /// - conceal_delay_ms: time a mismatch stays visible before turning back
    #[new]
    #[pyo3(signature = (seed = None, reveal_delay_ms = 600, conceal_delay_ms = 700))]
    fn new(seed: Option<u64>, reveal_delay_ms: u64, conceal_delay_ms: u64) -> Self {
        let config = GameConfig::default()
            .with_reveal_delay(std::time::Duration::from_millis(reveal_delay_ms))
            .with_conceal_delay(std::time::Duration::from_millis(conceal_delay_ms));
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            game: Game::new(config, TimerQueue::new(SystemClock::new()), rng),
        }
    }

    /// Deal a new game, discarding any game in progress.
    fn start_game(&mut self) {
        self.game.start_game();
    }

    /// Select a card by id (e.g. "10-hearts").
    ///
    /// Returns whether the selection was accepted.
    fn select_card(&mut self, card_id: &str) -> PyResult<bool> {
        let id = parse_card(card_id)?;
        Ok(self.game.select_card(id).is_accepted())
    }

    /// Run resolutions whose delay has elapsed.
    fn tick(&mut self) -> usize {
        self.game.tick()
    }

    /// Run every pending resolution immediately.
    fn settle(&mut self) -> usize {
        self.game.settle()
    }

    /// Drain pending events. True when any of them turned a card over, so
    /// the table needs redrawing.
    fn take_redraw(&mut self) -> bool {
        self.game
            .drain_events()
            .iter()
            .any(|event| event.changes_faces())
    }

    /// Face of a card: "face-down", "face-up", or "matched".
    fn face(&self, card_id: &str) -> PyResult<&'static str> {
        let id = parse_card(card_id)?;
        Ok(face_name(self.game.face(id)))
    }

    /// Card ids in table order.
    fn deck(&self) -> Vec<String> {
        self.game.state().deck().ids().map(|id| id.to_string()).collect()
    }

    /// Face label of a card (e.g. "A♠").
    fn label(&self, card_id: &str) -> PyResult<String> {
        let id = parse_card(card_id)?;
        self.game
            .state()
            .card(id)
            .map(|card| card.label())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn phase(&self) -> &'static str {
        phase_name(self.game.phase())
    }

    /// Current player number (1 or 2).
    #[getter]
    fn current_player(&self) -> u8 {
        self.game.state().current_player().number()
    }

    /// Scores as (player 1, player 2).
    #[getter]
    fn scores(&self) -> (u32, u32) {
        let state = self.game.state();
        (state.score(PlayerId::ONE), state.score(PlayerId::TWO))
    }

    /// Score of player 1 or 2.
    fn score(&self, player: u8) -> PyResult<u32> {
        PlayerId::from_number(player)
            .map(|player| self.game.state().score(player))
            .ok_or_else(|| PyValueError::new_err(format!("no player {player}")))
    }

    #[getter]
    fn remaining_pairs(&self) -> u32 {
        self.game.state().remaining_pairs()
    }

    #[getter]
    fn is_resolving(&self) -> bool {
        self.game.state().is_resolving()
    }

    #[getter]
    fn status(&self) -> String {
        self.game.status().to_string()
    }

    /// Winner's number (1 or 2), 0 for a draw, None while unfinished.
    #[getter]
    fn outcome(&self) -> Option<u8> {
        self.game.outcome().map(|outcome| match outcome {
            GameOutcome::Winner(player) => player.number(),
            GameOutcome::Draw => 0,
        })
    }

    fn __repr__(&self) -> String {
        let (one, two) = self.scores();
        format!(
            "PairGame(phase={}, current=P{}, scores={}-{})",
            self.phase(),
            self.current_player(),
            one,
            two
        )
    }
}
