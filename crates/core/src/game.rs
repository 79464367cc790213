//! Game engine - the spawn/fall/lock/clear/respawn cycle.
//!
//! Owns the field, the three live pieces (current, next, last), the bag
//! sequencer, and the score. All piece mutation is speculative: attempt,
//! test collision against the field, revert on failure. Collision is an
//! expected branch outcome, never an error; the one irrecoverable condition
//! is a blocked spawn, which flips the engine into its terminal state.

use arrayvec::ArrayVec;

use voxtris_types::{Axis, GameAction, Spin, FALL_INTERVAL_MS};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::ShapeBag;
use crate::scoring::lock_score;

/// Fire-and-forget feedback hooks emitted on engine transitions.
///
/// Consumers drain these via [`Game::take_events`]; an unread or overflowed
/// event has no effect on engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved,
    Rotated,
    Landed,
    HardDropped,
}

const EVENT_QUEUE_CAP: usize = 16;

/// A single game session's complete engine state.
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    /// The falling piece. Remains set after a terminal spawn so the render
    /// feed can still show it.
    current: Option<Piece>,
    /// Queued piece; immutable until promoted.
    next: Option<Piece>,
    /// Clone of the most recently locked piece, for preview display only.
    last: Option<Piece>,
    bag: ShapeBag,
    score: u32,
    game_over: bool,
    fall_accumulator_ms: u32,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAP>,
}

impl Game {
    /// A fresh engine with no pieces spawned yet.
    pub fn new(seed: u32) -> Self {
        Self {
            field: Field::new(),
            current: None,
            next: None,
            last: None,
            bag: ShapeBag::new(seed),
            score: 0,
            game_over: false,
            fall_accumulator_ms: 0,
            events: ArrayVec::new(),
        }
    }

    /// Full reset and first spawn: the MainMenu -> Playing (and restart)
    /// entry point. The bag keeps its RNG state across games.
    pub fn start(&mut self) {
        self.field.clear();
        self.current = None;
        self.next = None;
        self.last = None;
        self.score = 0;
        self.game_over = false;
        self.fall_accumulator_ms = 0;
        self.events.clear();
        self.spawn();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Direct field access for scenario setup in tests and benches.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn last_piece(&self) -> Option<&Piece> {
        self.last.as_ref()
    }

    /// Drain queued feedback events.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_CAP> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        // Overflow just drops the notification; delivery is best-effort.
        let _ = self.events.try_push(event);
    }

    /// Promote the queued piece (or draw the first pair), refill the queue,
    /// and test the spawn anchor. A colliding spawn is the sole game-over
    /// trigger.
    pub fn spawn(&mut self) {
        let mut current = match self.next.take() {
            Some(piece) => piece,
            None => Piece::from_catalog(self.bag.draw()),
        };
        current.respawn();
        self.next = Some(Piece::from_catalog(self.bag.draw()));

        if self.field.collides(&current) {
            self.game_over = true;
        }
        self.current = Some(current);
    }

    /// Speculative translation: apply, test, revert on collision.
    ///
    /// The piece is never left colliding after this returns; a failed move
    /// restores the anchor exactly (no drift).
    pub fn try_move(&mut self, dx: i8, dy: i8, dz: i8) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.translate(dx, dy, dz);
        if self.field.collides(piece) {
            piece.translate(-dx, -dy, -dz);
            return false;
        }
        true
    }

    /// Speculative rotation about `axis`.
    ///
    /// One counter-clockwise application per the right-hand rule; clockwise
    /// is three of them. On collision the pre-rotation blocks and anchor are
    /// restored together.
    pub fn try_rotate(&mut self, axis: Axis, spin: Spin) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        let saved = piece.clone();
        let turns = match spin {
            Spin::Ccw => 1,
            Spin::Cw => 3,
        };
        for _ in 0..turns {
            piece.rotate(axis);
        }
        if self.field.collides(piece) {
            *piece = saved;
            return false;
        }
        true
    }

    /// One gravity step: move down a cell, or lock where the piece stands.
    /// Returns true if the piece locked.
    pub fn step_down(&mut self) -> bool {
        if self.game_over || self.current.is_none() {
            return false;
        }
        if self.try_move(0, -1, 0) {
            return false;
        }
        self.lock_and_clear();
        self.emit(GameEvent::Landed);
        true
    }

    /// Synchronous batch of gravity steps followed by an immediate lock.
    pub fn hard_drop(&mut self) {
        if self.game_over || self.current.is_none() {
            return;
        }
        while self.try_move(0, -1, 0) {}
        self.lock_and_clear();
        self.emit(GameEvent::HardDropped);
    }

    /// Commit the current piece, clear full layers, score, respawn.
    fn lock_and_clear(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.field.lock(&piece);
        let cleared = self.field.clear_full_layers();
        self.score += lock_score(piece.block_count(), cleared);
        self.last = Some(piece);
        self.spawn();
    }

    /// Apply a discrete player action. No-op once terminal.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }
        match action {
            GameAction::Move { dx, dz } => {
                let moved = self.try_move(dx, 0, dz);
                if moved {
                    self.emit(GameEvent::Moved);
                }
                moved
            }
            GameAction::Rotate { axis, spin } => {
                let rotated = self.try_rotate(axis, spin);
                if rotated {
                    self.emit(GameEvent::Rotated);
                }
                rotated
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Advance the fall accumulator; each crossed threshold applies exactly
    /// one gravity step, so a slow frame catches up deterministically.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        self.fall_accumulator_ms += elapsed_ms;
        while self.fall_accumulator_ms >= FALL_INTERVAL_MS {
            self.fall_accumulator_ms -= FALL_INTERVAL_MS;
            self.step_down();
            if self.game_over {
                break;
            }
        }
    }

    /// How many cells the current piece can still fall (drop indicator).
    pub fn landing_distance(&self) -> Option<i8> {
        let piece = self.current.as_ref()?;
        let mut drop: i8 = 0;
        loop {
            let clear = piece.blocks.iter().all(|&(dx, dy, dz)| {
                self.field
                    .is_valid(piece.x + dx, piece.y + dy - drop - 1, piece.z + dz)
            });
            if clear {
                drop += 1;
            } else {
                break;
            }
        }
        Some(drop)
    }
}
