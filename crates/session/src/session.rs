//! Session: the top-level mode state machine.
//!
//! One `Session` bundles everything mutable about a running application:
//! the current mode, the player engine, the menu demo, and the high-score
//! board. The host owns it explicitly and passes it to the tick and input
//! entry points; there are no globals.
//!
//! Transitions:
//!
//! ```text
//! Loading --(skip | 3s timeout)--> MainMenu --(start)--> Playing
//! Playing <-> Paused (pause toggle)
//! Playing --(engine terminal)--> GameOver --(restart)--> Playing
//! Playing/Paused/GameOver --(back)--> MainMenu
//! ```
//!
//! Every event is safe to deliver spuriously; one that does not apply to
//! the current mode is ignored.

use voxtris_core::Game;
use voxtris_types::{Mode, SessionEvent, LOADING_DURATION_MS};

use crate::demo::Demo;
use crate::highscore::HighScoreBoard;
use crate::store::{unix_timestamp, ScoreStore};

pub struct Session {
    mode: Mode,
    game: Game,
    demo: Demo,
    scores: HighScoreBoard,
    store: Box<dyn ScoreStore>,
    loading_elapsed_ms: u32,
    new_high_score: bool,
}

impl Session {
    /// Build a session in Loading mode. An unreadable store degrades to an
    /// empty board rather than failing startup.
    pub fn new(seed: u32, store: Box<dyn ScoreStore>) -> Self {
        let scores = HighScoreBoard::from_entries(store.load().unwrap_or_default());
        Self {
            mode: Mode::Loading,
            game: Game::new(seed),
            demo: Demo::new(seed.wrapping_add(1)),
            scores,
            store,
            loading_elapsed_ms: 0,
            new_high_score: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Engine mutation escape hatch for the host's event drain.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn demo_game(&self) -> &Game {
        self.demo.game()
    }

    pub fn scores(&self) -> &HighScoreBoard {
        &self.scores
    }

    /// Whether the most recent game-over produced a table entry.
    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    /// Loading progress in percent, for the splash screen.
    pub fn loading_percent(&self) -> u32 {
        (self.loading_elapsed_ms * 100 / LOADING_DURATION_MS).min(100)
    }

    /// Deliver a discrete event. Unapplicable events are no-ops.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SkipLoading => {
                if self.mode == Mode::Loading {
                    self.mode = Mode::MainMenu;
                }
            }
            SessionEvent::Start => {
                if self.mode == Mode::MainMenu {
                    self.start_game();
                }
            }
            SessionEvent::PauseToggle => match self.mode {
                Mode::Playing => self.mode = Mode::Paused,
                Mode::Paused => self.mode = Mode::Playing,
                _ => {}
            },
            SessionEvent::Restart => {
                if self.mode == Mode::GameOver {
                    self.start_game();
                }
            }
            SessionEvent::Back => {
                if matches!(self.mode, Mode::Playing | Mode::Paused | Mode::GameOver) {
                    self.mode = Mode::MainMenu;
                }
            }
            SessionEvent::Action(action) => {
                if self.mode == Mode::Playing {
                    self.game.apply_action(action);
                    if self.game.game_over() {
                        self.enter_game_over();
                    }
                }
            }
        }
    }

    /// Advance whatever the current mode animates. Transitioning away from
    /// Playing simply stops routing time to the engine; there is nothing
    /// in flight to cancel.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.mode {
            Mode::Loading => {
                self.loading_elapsed_ms += elapsed_ms;
                if self.loading_elapsed_ms >= LOADING_DURATION_MS {
                    self.mode = Mode::MainMenu;
                }
            }
            Mode::MainMenu => {
                self.demo.tick(elapsed_ms);
            }
            Mode::Playing => {
                self.game.tick(elapsed_ms);
                if self.game.game_over() {
                    self.enter_game_over();
                }
            }
            Mode::Paused | Mode::GameOver => {}
        }
    }

    fn start_game(&mut self) {
        self.game.start();
        self.new_high_score = false;
        self.mode = Mode::Playing;
    }

    fn enter_game_over(&mut self) {
        self.mode = Mode::GameOver;
        self.new_high_score = self.scores.submit(self.game.score(), unix_timestamp());
        if self.new_high_score {
            // Persistence failure is the store's problem, not the tick's.
            let _ = self.store.save(self.scores.entries());
        }
    }
}
