//! Core types module - shared data structures and constants
//!
//! Pure data types used across the workspace: playfield dimensions, timing
//! constants, colors, axes, game actions, session events, and modes. No
//! external dependencies, so every crate (core logic, input mapping, terminal
//! rendering) can share them.
//!
//! # Playfield dimensions
//!
//! The playfield is a volume, not a plane:
//!
//! - **Width (X)**: 8 columns
//! - **Height (Y)**: 20 layers, y = 0 is the floor, pieces fall toward it
//! - **Depth (Z)**: 8 rows
//! - **Spawn anchor**: (4, 17, 4), i.e. (W/2, H-3, D/2)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver tick cadence (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 500 | Gravity accumulator threshold |
//! | `LOADING_DURATION_MS` | 3000 | Loading screen auto-advance |

/// Playfield width in cells (X axis)
pub const GRID_WIDTH: u8 = 8;

/// Playfield height in layers (Y axis)
pub const GRID_HEIGHT: u8 = 20;

/// Playfield depth in cells (Z axis)
pub const GRID_DEPTH: u8 = 8;

/// Fixed driver tick interval in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity step threshold: the fall accumulator applies one downward step
/// each time it crosses this many milliseconds.
pub const FALL_INTERVAL_MS: u32 = 500;

/// Loading screen auto-advances to the main menu after this long.
pub const LOADING_DURATION_MS: u32 = 3000;

/// Maximum number of persisted high-score entries.
pub const MAX_HIGHSCORES: usize = 10;

/// Demo autoplay acts on roughly this percentage of ticks.
pub const DEMO_ACT_PERCENT: u32 = 2;

/// An opaque RGB color with channels in [0, 1].
///
/// Value semantics throughout: copied, compared componentwise, never aliased.
/// Alpha belongs to render-layer effects and has no place in the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A playfield cell: empty or holding a settled block's color.
pub type Cell = Option<Color>;

/// The three rotation axes of the offset frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation direction. One engine rotation step is a counter-clockwise
/// quarter turn (right-hand rule); clockwise is three of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Ccw,
    Cw,
}

/// Discrete player actions forwarded to the game engine.
///
/// Lateral movement carries grid-axis deltas; the input layer is responsible
/// for snapping camera-relative intent onto `dx`/`dz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move { dx: i8, dz: i8 },
    Rotate { axis: Axis, spin: Spin },
    HardDrop,
}

/// Events delivered to the session state machine.
///
/// All of these are safe to deliver spuriously: an event that does not apply
/// to the current mode is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Skip the loading screen.
    SkipLoading,
    /// Start a fresh game from the main menu.
    Start,
    /// Toggle Playing <-> Paused.
    PauseToggle,
    /// Restart after game over.
    Restart,
    /// Return to the main menu.
    Back,
    /// A gameplay action for the engine (Playing mode only).
    Action(GameAction),
}

/// Top-level application mode. Exactly one is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loading,
    MainMenu,
    Playing,
    Paused,
    GameOver,
}

/// A recorded high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Unix timestamp (seconds) of when the score was achieved.
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_value_semantics() {
        let a = Color::new(0.0, 1.0, 1.0);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, Color::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(GRID_WIDTH, 8);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(GRID_DEPTH, 8);
    }
}
