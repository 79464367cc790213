//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the 3D falling-block game live here, with zero
//! dependencies on UI, audio, or I/O:
//!
//! - **Deterministic**: the same seed produces the same shape sequence
//! - **Testable**: every rule has unit coverage at the module level
//! - **Portable**: runs headless (demo autoplay, benches) or behind a UI
//! - **Allocation-light**: fixed-capacity structures on the tick path
//!
//! # Module structure
//!
//! - [`catalog`]: the seven shape geometries and their palette colors
//! - [`piece`]: positioned, rotatable block sets (unvalidated mutation)
//! - [`field`]: the 8x20x8 volume, collision authority, layer compaction
//! - [`rng`]: seeded LCG and the fair bag sequencer
//! - [`scoring`]: placement and layer-clear points
//! - [`game`]: the spawn/fall/lock/clear cycle and terminal detection
//! - [`snapshot`]: read-only render feed
//!
//! # Rules
//!
//! - Gravity pulls toward y = 0 on a 500 ms accumulator
//! - Rotation is a right-hand-rule quarter turn about X, Y, or Z and is
//!   simply rejected on collision (no kick tables)
//! - A full horizontal layer clears and everything above settles one layer
//! - Scoring: 10 points per locked block, plus 100/300/500/800 for 1-4
//!   simultaneous layers (100 per layer beyond that)
//! - A colliding spawn ends the game; nothing else does

pub mod catalog;
pub mod field;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use voxtris_types as types;

pub use catalog::{BlockOffset, MAX_BLOCKS, PALETTE, SHAPES, SHAPE_COUNT};
pub use field::Field;
pub use game::{Game, GameEvent};
pub use piece::{Piece, SPAWN_ANCHOR};
pub use rng::{ShapeBag, SimpleRng};
pub use scoring::{layer_clear_score, lock_score, placement_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PiecePreview};
