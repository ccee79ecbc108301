//! Game lifecycle: the command surface the presentation layer drives.
//!
//! `Game` owns the state, the deck RNG, and a scheduler. Commands come in
//! through `start_game` and `select_card`; delayed resolution runs when the
//! caller polls `tick` (or `settle`, which ignores delays).

use tracing::{info, trace};

use super::snapshot::Snapshot;
use super::status::Status;
use crate::cards::{CardId, Deck, Face};
use crate::core::{GameConfig, GameEvent, GameRng, GameState, Phase, PlayerId};
use crate::rules::{self, GameOutcome, Resolution, Selection};
use crate::scheduler::{
    Clock, ImmediateScheduler, ScheduledTask, Scheduler, SystemClock, TaskKind, TimerQueue,
};

/// A two-player matching game session.
///
/// ## Example
///
/// ```
/// use rust_pairs::cards::CardId;
/// use rust_pairs::core::{Phase, PlayerId};
/// use rust_pairs::game::Game;
///
/// let mut game = Game::immediate(42);
/// game.start_game();
/// assert_eq!(game.phase(), Phase::Playing);
///
/// let first: CardId = "A-spades".parse().unwrap();
/// let second: CardId = "A-hearts".parse().unwrap();
/// game.select_card(first);
/// game.select_card(second);
/// game.tick();
///
/// assert_eq!(game.state().score(PlayerId::ONE), 1);
/// assert_eq!(game.state().current_player(), PlayerId::ONE);
/// ```
pub struct Game<S: Scheduler = TimerQueue<SystemClock>> {
    config: GameConfig,
    scheduler: S,
    rng: GameRng,
    state: GameState,
    generation: u64,
    status: Status,
    events: Vec<GameEvent>,
}

impl Game {
    /// Real-time game with default pacing.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            GameConfig::default(),
            TimerQueue::new(SystemClock::new()),
            GameRng::new(seed),
        )
    }

    /// Real-time game dealt from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(
            GameConfig::default(),
            TimerQueue::new(SystemClock::new()),
            GameRng::from_entropy(),
        )
    }
}

impl Game<ImmediateScheduler> {
    /// Game whose pending resolutions are all due at the next `tick`.
    #[must_use]
    pub fn immediate(seed: u64) -> Self {
        Self::new(GameConfig::instant(), ImmediateScheduler::new(), GameRng::new(seed))
    }
}

impl<C: Clock> Game<TimerQueue<C>> {
    /// Game paced by an arbitrary clock.
    #[must_use]
    pub fn with_clock(config: GameConfig, clock: C, seed: u64) -> Self {
        Self::new(config, TimerQueue::new(clock), GameRng::new(seed))
    }
}

impl<S: Scheduler> Game<S> {
    /// Create an idle session. Call `start_game` to deal.
    #[must_use]
    pub fn new(config: GameConfig, scheduler: S, rng: GameRng) -> Self {
        Self {
            config,
            scheduler,
            rng,
            state: GameState::idle(),
            generation: 0,
            status: Status::AwaitingStart,
            events: Vec::new(),
        }
    }

    // === Commands ===

    /// Deal a fresh shuffled deck and reset every score, selection, and
    /// matched card. Player 1 moves first.
    ///
    /// Any resolution still queued from the previous game is dropped.
    pub fn start_game(&mut self) {
        self.generation += 1;
        self.scheduler.clear();

        let deck = Deck::build(&mut self.rng);
        self.state = GameState::new(deck);
        self.status = Status::Turn(PlayerId::ONE);

        info!(generation = self.generation, seed = self.rng.seed(), "game started");
        self.events.push(GameEvent::GameStarted);
        self.events.push(GameEvent::TurnStarted {
            player: PlayerId::ONE,
        });
    }

    /// Select a card for the current player.
    ///
    /// Illegal selections are ignored and change nothing. Completing a pair
    /// schedules its resolution after the reveal delay.
    pub fn select_card(&mut self, id: CardId) -> Selection {
        let selection = rules::select_card(&mut self.state, id);

        if selection.is_accepted() {
            self.events.push(GameEvent::CardRevealed {
                card: id,
                player: self.state.current_player(),
            });
        }
        if let Selection::PairPending(_) = selection {
            self.scheduler.schedule(
                self.config.reveal_delay,
                ScheduledTask::new(self.generation, TaskKind::ResolvePair),
            );
        }

        selection
    }

    /// Run every task whose delay has elapsed. Returns the number run.
    pub fn tick(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_due() {
            if self.run(task) {
                ran += 1;
            }
        }
        ran
    }

    /// Run every queued task now, delays notwithstanding, including tasks
    /// queued while settling. Returns the number run.
    pub fn settle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_next() {
            if self.run(task) {
                ran += 1;
            }
        }
        ran
    }

    fn run(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.generation {
            trace!(task = ?task.kind, stale = task.generation, current = self.generation, "dropping stale task");
            return false;
        }

        match task.kind {
            TaskKind::ResolvePair => self.resolve(),
            TaskKind::ConcealPair => self.conceal(),
        }
        true
    }

    fn resolve(&mut self) {
        match rules::resolve_pair(&mut self.state) {
            Resolution::Matched {
                player,
                cards,
                points,
                remaining_pairs,
            } => {
                self.status = Status::Matched { player, points };
                self.events.push(GameEvent::PairMatched {
                    player,
                    cards,
                    points,
                    remaining_pairs,
                });
                if self.state.is_complete() {
                    self.finish_game();
                }
            }
            Resolution::Mismatched { player, cards } => {
                self.status = Status::Mismatched;
                self.events.push(GameEvent::PairMismatched { player, cards });
                self.scheduler.schedule(
                    self.config.conceal_delay,
                    ScheduledTask::new(self.generation, TaskKind::ConcealPair),
                );
            }
            Resolution::Aborted => {
                self.events.push(GameEvent::ResolutionAborted);
            }
        }
    }

    fn conceal(&mut self) {
        if let Some((cards, next)) = rules::conceal_pair(&mut self.state) {
            self.status = Status::Turn(next);
            self.events.push(GameEvent::CardsConcealed { cards });
            self.events.push(GameEvent::TurnStarted { player: next });
        }
    }

    /// Declare the result once every card is matched. Terminal until the
    /// next `start_game`.
    fn finish_game(&mut self) {
        let outcome = GameOutcome::from_scores(self.state.scores());
        let scores = self.state.scores().clone();

        self.state.phase = Phase::Finished;
        self.state.outcome = Some(outcome);
        self.status = Status::Finished {
            outcome,
            scores: scores.clone(),
        };

        info!(
            ?outcome,
            player_one = scores[PlayerId::ONE],
            player_two = scores[PlayerId::TWO],
            "game finished"
        );
        self.events.push(GameEvent::GameFinished { outcome, scores });
    }

    // === Observation ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn face(&self, id: CardId) -> Face {
        self.state.face(id)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Counts games started in this session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Events not yet drained.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every event pushed since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.status)
    }
}
