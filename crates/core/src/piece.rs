//! Piece module - a positioned, rotatable set of block offsets.
//!
//! A `Piece` is the only mutable spatial entity in the core. Its operations
//! are deliberately unvalidated: `translate` and `rotate` mutate blindly, and
//! the playfield's collision test is the single authority on validity. The
//! engine wraps them in speculative mutate-then-revert transactions.

use arrayvec::ArrayVec;

use voxtris_types::{Axis, Color, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

use crate::catalog::{self, BlockOffset, MAX_BLOCKS};

/// Fixed spawn anchor: X center, Z center, three layers below the ceiling.
pub const SPAWN_ANCHOR: (i8, i8, i8) = (
    (GRID_WIDTH / 2) as i8,
    (GRID_HEIGHT - 3) as i8,
    (GRID_DEPTH / 2) as i8,
);

/// A falling (or queued, or just-locked) piece.
///
/// The anchor has no bounds of its own; only a collision test against the
/// playfield establishes whether a position is legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Block offsets relative to the anchor. Rotation rewrites this list.
    pub blocks: ArrayVec<BlockOffset, MAX_BLOCKS>,
    pub x: i8,
    pub y: i8,
    pub z: i8,
    pub color: Color,
}

impl Piece {
    /// Build a piece from a catalog index, anchored at the spawn position.
    pub fn from_catalog(index: usize) -> Self {
        let (offsets, color) = catalog::shape(index);
        let (x, y, z) = SPAWN_ANCHOR;
        Self {
            blocks: offsets.iter().copied().collect(),
            x,
            y,
            z,
            color,
        }
    }

    /// Move the anchor back to the spawn position, keeping orientation.
    pub fn respawn(&mut self) {
        let (x, y, z) = SPAWN_ANCHOR;
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Unconditional translation. Callers validate via the playfield and
    /// revert with the negated delta on collision.
    pub fn translate(&mut self, dx: i8, dy: i8, dz: i8) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Rotate 90 degrees counter-clockwise (right-hand rule) about `axis`,
    /// in the piece's local offset frame.
    ///
    /// Three applications about the same axis give the clockwise quarter
    /// turn. No validation happens here; on collision the caller must
    /// restore the pre-rotation blocks and anchor together.
    pub fn rotate(&mut self, axis: Axis) {
        for block in self.blocks.iter_mut() {
            let (x, y, z) = *block;
            *block = match axis {
                Axis::X => (x, -z, y),
                Axis::Y => (-z, y, x),
                Axis::Z => (-y, x, z),
            };
        }
    }

    /// Absolute grid positions of every block at the current anchor.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, i8)> + '_ {
        self.blocks
            .iter()
            .map(move |&(dx, dy, dz)| (self.x + dx, self.y + dy, self.z + dz))
    }

    /// Number of blocks in the piece.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(blocks: &ArrayVec<BlockOffset, MAX_BLOCKS>) -> Vec<BlockOffset> {
        let mut v: Vec<_> = blocks.iter().copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::from_catalog(0);
        assert_eq!((piece.x, piece.y, piece.z), (4, 17, 4));
    }

    #[test]
    fn test_translate_is_unconditional() {
        let mut piece = Piece::from_catalog(0);
        piece.translate(-100, 5, 42);
        assert_eq!((piece.x, piece.y, piece.z), (-96, 22, 46));
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for index in 0..catalog::SHAPE_COUNT {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let mut piece = Piece::from_catalog(index);
                let original = sorted(&piece.blocks);
                for _ in 0..4 {
                    piece.rotate(axis);
                }
                assert_eq!(sorted(&piece.blocks), original, "shape {index} {axis:?}");
            }
        }
    }

    #[test]
    fn test_rotate_y_maps_offsets() {
        let mut piece = Piece::from_catalog(0);
        piece.rotate(Axis::Y);
        // (dx, 0, 0) -> (0, 0, dx)
        let got = sorted(&piece.blocks);
        assert_eq!(got, vec![(0, 0, 0), (0, 0, 1), (0, 0, 2), (0, 0, 3)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut piece = Piece::from_catalog(2);
        let snapshot = piece.clone();
        piece.translate(1, -1, 0);
        piece.rotate(Axis::Z);
        assert_ne!(piece, snapshot);
        assert_eq!((snapshot.x, snapshot.y, snapshot.z), SPAWN_ANCHOR);
    }
}
