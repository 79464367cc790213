//! Render feed: read-only snapshots of the engine state.
//!
//! Pulled once per frame by the presentation layer and never mutated by it.
//! `snapshot_into` is the allocation-free path; callers keep one snapshot
//! and refresh it each frame.

use arrayvec::ArrayVec;

use voxtris_types::{Cell, Color, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

use crate::catalog::{BlockOffset, MAX_BLOCKS};
use crate::game::Game;
use crate::piece::Piece;

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;
const D: usize = GRID_DEPTH as usize;

/// A piece's geometry for preview panes (next/last).
#[derive(Debug, Clone, PartialEq)]
pub struct PiecePreview {
    pub blocks: ArrayVec<BlockOffset, MAX_BLOCKS>,
    pub color: Color,
}

impl From<&Piece> for PiecePreview {
    fn from(piece: &Piece) -> Self {
        Self {
            blocks: piece.blocks.clone(),
            color: piece.color,
        }
    }
}

/// The falling piece resolved to absolute grid cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSnapshot {
    pub cells: ArrayVec<(i8, i8, i8), MAX_BLOCKS>,
    pub color: Color,
    /// How many cells the piece can still fall (drop indicator).
    pub landing_distance: i8,
}

/// Complete per-frame view of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Settled cells, indexed `grid[y][z][x]`.
    pub grid: [[[Cell; W]; D]; H],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PiecePreview>,
    pub last: Option<PiecePreview>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[[None; W]; D]; H];
        self.active = None;
        self.next = None;
        self.last = None;
        self.score = 0;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[[None; W]; D]; H],
            active: None,
            next: None,
            last: None,
            score: 0,
            game_over: false,
        }
    }
}

impl Game {
    /// Refresh `out` with the current frame's state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = [[[None; W]; D]; H];
        for ((x, y, z), color) in self.field().occupied_cells() {
            out.grid[y as usize][z as usize][x as usize] = Some(color);
        }

        out.active = self.current().map(|piece| ActiveSnapshot {
            cells: piece.cells().collect(),
            color: piece.color,
            landing_distance: self.landing_distance().unwrap_or(0),
        });
        out.next = self.next_piece().map(PiecePreview::from);
        out.last = self.last_piece().map(PiecePreview::from);
        out.score = self.score();
        out.game_over = self.game_over();
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
