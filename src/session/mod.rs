//! Sessions: one game, serialized behind a lock.
//!
//! Requests for the same game may arrive concurrently. `Session::handle`
//! applies the action and builds the resulting view under a single lock
//! acquisition, so every action is an atomic read-modify-write and two
//! submits can never both consume a mistake for one guess.
//!
//! ## Usage
//!
//! ```
//! use funnections::core::{Action, GameConfig, GameRng};
//! use funnections::puzzles;
//! use funnections::rules::GameEngine;
//! use funnections::session::Session;
//!
//! let config = GameConfig::default();
//! let puzzle = puzzles::sample(&config).unwrap();
//! let session = Session::start(GameEngine::new(config), &puzzle, "Today", GameRng::new(1));
//!
//! let response = session.handle(Action::Shuffle);
//! assert_eq!(response.view.tiles.len(), 16);
//! ```

pub mod registry;

pub use registry::{SessionId, SessionRegistry};

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::core::action::{Action, ActionOutcome, IgnoreReason};
use crate::core::puzzle::Puzzle;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::GameEngine;
use crate::view::{ActionRequest, ViewModel};

/// What a caller gets back for every request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Response {
    pub outcome: ActionOutcome,
    pub view: ViewModel,
}

/// A single game with serialized access.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    state: Mutex<GameState>,
}

impl Session {
    /// Wrap an existing game.
    #[must_use]
    pub fn new(engine: GameEngine, state: GameState) -> Self {
        Self {
            engine,
            state: Mutex::new(state),
        }
    }

    /// Deal a new game of `puzzle`.
    pub fn start(
        engine: GameEngine,
        puzzle: &Puzzle,
        date: impl Into<String>,
        rng: GameRng,
    ) -> Self {
        let state = engine.initialize(puzzle, date, rng);
        Self::new(engine, state)
    }

    /// Apply an action atomically and return the updated view.
    pub fn handle(&self, action: Action) -> Response {
        let mut state = self.lock();
        let outcome = self.engine.apply(&mut state, action);
        Response {
            outcome,
            view: ViewModel::from_state(&state),
        }
    }

    /// Decode and apply a raw request.
    ///
    /// A request that does not decode changes nothing; the caller still gets
    /// the current view.
    pub fn handle_request(&self, name: &str, id: Option<&str>) -> Response {
        match ActionRequest::decode(name, id) {
            Ok(action) => self.handle(action),
            Err(err) => {
                warn!(%err, name, "ignoring request");
                Response {
                    outcome: ActionOutcome::Ignored {
                        reason: IgnoreReason::MalformedRequest,
                    },
                    view: self.view(),
                }
            }
        }
    }

    /// Current view, without recording anything.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.lock())
    }

    /// Copy of the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.lock().clone()
    }

    /// The engine this session plays by.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    // The engine leaves state consistent after every call, so a panic in
    // another holder does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
