//! Main-menu demo: a self-piloting game instance behind the menu text.
//!
//! Runs its own engine with its own RNG, fully isolated from the
//! player-facing game. On roughly 2% of ticks it performs a random action;
//! gravity runs normally; a finished demo game quietly restarts.

use voxtris_core::{Game, SimpleRng};
use voxtris_types::{Axis, GameAction, Spin, DEMO_ACT_PERCENT};

/// Demo game plus its decision RNG.
pub struct Demo {
    game: Game,
    rng: SimpleRng,
}

impl Demo {
    pub fn new(seed: u32) -> Self {
        let mut game = Game::new(seed);
        game.start();
        Self {
            game,
            rng: SimpleRng::new(seed.wrapping_mul(2654435761)),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Advance the demo by one driver tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game.game_over() {
            self.game.start();
        }

        if self.rng.chance_percent(DEMO_ACT_PERCENT) {
            let action = self.pick_action();
            self.game.apply_action(action);
        }

        self.game.tick(elapsed_ms);
        // Demo feedback hooks go nowhere.
        let _ = self.game.take_events();
    }

    fn pick_action(&mut self) -> GameAction {
        match self.rng.next_range(3) {
            0 => {
                let (dx, dz) = match self.rng.next_range(4) {
                    0 => (1, 0),
                    1 => (-1, 0),
                    2 => (0, 1),
                    _ => (0, -1),
                };
                GameAction::Move { dx, dz }
            }
            1 => {
                let axis = match self.rng.next_range(3) {
                    0 => Axis::X,
                    1 => Axis::Y,
                    _ => Axis::Z,
                };
                GameAction::Rotate {
                    axis,
                    spin: Spin::Ccw,
                }
            }
            _ => GameAction::HardDrop,
        }
    }
}
