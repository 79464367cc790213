//! Field module - the 8x20x8 volumetric playfield.
//!
//! Storage is a flat array in layer-major order, so a whole horizontal
//! (constant-Y) layer is one contiguous slice. That makes full-layer checks
//! a slice scan and layer compaction a single `copy_within`.
//!
//! Coordinates: (x, y, z) with x in 0..8, y in 0..20 (0 = floor, pieces fall
//! toward it), z in 0..8. Every access is bounds-checked.

use voxtris_types::{Cell, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

use crate::piece::Piece;

/// Cells per horizontal layer.
const LAYER_SIZE: usize = (GRID_WIDTH as usize) * (GRID_DEPTH as usize);

/// Total number of cells in the volume.
const GRID_SIZE: usize = LAYER_SIZE * (GRID_HEIGHT as usize);

/// The playfield volume. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Flat cell array, layer-major: index = (y * DEPTH + z) * WIDTH + x.
    cells: [Cell; GRID_SIZE],
}

impl Field {
    /// Create an empty field.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Flat index for (x, y, z), or None when out of bounds on any axis.
    #[inline(always)]
    fn index(x: i8, y: i8, z: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 {
            return None;
        }
        if y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        if z < 0 || z >= GRID_DEPTH as i8 {
            return None;
        }
        Some((y as usize * GRID_DEPTH as usize + z as usize) * GRID_WIDTH as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    pub fn depth(&self) -> u8 {
        GRID_DEPTH
    }

    /// Cell at (x, y, z); None if out of bounds.
    pub fn get(&self, x: i8, y: i8, z: i8) -> Option<Cell> {
        Self::index(x, y, z).map(|i| self.cells[i])
    }

    /// Set cell at (x, y, z); returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, z: i8, cell: Cell) -> bool {
        match Self::index(x, y, z) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_valid(&self, x: i8, y: i8, z: i8) -> bool {
        matches!(self.get(x, y, z), Some(None))
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8, z: i8) -> bool {
        matches!(self.get(x, y, z), Some(Some(_)))
    }

    /// Single validity authority: true iff any of the piece's absolute cells
    /// is out of bounds on any axis or maps to an occupied grid cell.
    ///
    /// Every mutation of a live piece (move, rotate, spawn, gravity step,
    /// hard drop) must consult this before committing.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y, z)| !self.is_valid(x, y, z))
    }

    /// Commit a piece's blocks into the grid.
    ///
    /// The caller guarantees the position is collision-free; out-of-bounds
    /// blocks are skipped rather than erroring.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y, z) in piece.cells() {
            self.set(x, y, z, Some(piece.color));
        }
    }

    /// True iff every (x, z) cell of layer `y` is occupied.
    pub fn is_layer_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * LAYER_SIZE;
        self.cells[start..start + LAYER_SIZE]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Clear every full horizontal layer, settling the stack in place.
    ///
    /// Scans bottom to top. A full layer is removed by shifting everything
    /// above it down one layer and clearing the exposed top layer; the same
    /// Y index is then re-examined, since new contents just settled into it.
    /// Returns the number of layers cleared by this call.
    pub fn clear_full_layers(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = 0;
        while y < GRID_HEIGHT as usize {
            if self.is_layer_full(y) {
                cleared += 1;
                // Shift layers (y+1)..H down by one; layer-major storage
                // makes this one overlapping copy.
                self.cells
                    .copy_within((y + 1) * LAYER_SIZE..GRID_SIZE, y * LAYER_SIZE);
                // Top layer is now stale.
                for cell in &mut self.cells[GRID_SIZE - LAYER_SIZE..] {
                    *cell = None;
                }
                // Re-examine the same index before advancing.
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Empty the whole volume.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Iterate occupied cells as ((x, y, z), color), for the render feed.
    pub fn occupied_cells(&self) -> impl Iterator<Item = ((u8, u8, u8), voxtris_types::Color)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|color| {
                let x = i % GRID_WIDTH as usize;
                let z = (i / GRID_WIDTH as usize) % GRID_DEPTH as usize;
                let y = i / LAYER_SIZE;
                ((x as u8, y as u8, z as u8), color)
            })
        })
    }

    /// Fill an entire layer with one color (test scaffolding).
    #[cfg(test)]
    pub fn fill_layer(&mut self, y: i8, color: voxtris_types::Color) {
        for z in 0..GRID_DEPTH as i8 {
            for x in 0..GRID_WIDTH as i8 {
                self.set(x, y, z, Some(color));
            }
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtris_types::Color;

    const RED: Color = Color::new(1.0, 0.0, 0.0);

    #[test]
    fn test_index_bounds() {
        assert_eq!(Field::index(0, 0, 0), Some(0));
        assert_eq!(Field::index(7, 0, 0), Some(7));
        assert_eq!(Field::index(0, 0, 1), Some(8));
        assert_eq!(Field::index(0, 1, 0), Some(64));
        assert_eq!(Field::index(7, 19, 7), Some(GRID_SIZE - 1));
        assert_eq!(Field::index(-1, 0, 0), None);
        assert_eq!(Field::index(8, 0, 0), None);
        assert_eq!(Field::index(0, 20, 0), None);
        assert_eq!(Field::index(0, 0, 8), None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut field = Field::new();
        assert!(field.set(3, 10, 5, Some(RED)));
        assert_eq!(field.get(3, 10, 5), Some(Some(RED)));
        assert!(field.set(3, 10, 5, None));
        assert_eq!(field.get(3, 10, 5), Some(None));
        assert!(!field.set(-1, 0, 0, Some(RED)));
    }

    #[test]
    fn test_layer_full_detection() {
        let mut field = Field::new();
        assert!(!field.is_layer_full(0));
        field.fill_layer(0, RED);
        assert!(field.is_layer_full(0));
        field.set(7, 0, 7, None);
        assert!(!field.is_layer_full(0));
    }

    #[test]
    fn test_clear_single_layer_shifts_down() {
        let mut field = Field::new();
        field.fill_layer(0, RED);
        field.set(2, 1, 3, Some(RED));

        assert_eq!(field.clear_full_layers(), 1);
        // The block at y=1 settled to y=0; the old layer is gone.
        assert_eq!(field.get(2, 0, 3), Some(Some(RED)));
        assert_eq!(field.get(2, 1, 3), Some(None));
        assert_eq!(field.get(0, 0, 0), Some(None));
    }

    #[test]
    fn test_clear_adjacent_full_layers_rescans_same_index() {
        let mut field = Field::new();
        field.fill_layer(0, RED);
        field.fill_layer(1, RED);
        field.set(5, 2, 5, Some(RED));

        assert_eq!(field.clear_full_layers(), 2);
        assert_eq!(field.get(5, 0, 5), Some(Some(RED)));
        assert_eq!(field.get(5, 1, 5), Some(None));
    }

    #[test]
    fn test_occupied_cells_iterator() {
        let mut field = Field::new();
        field.set(1, 2, 3, Some(RED));
        field.set(7, 19, 7, Some(RED));

        let cells: Vec<_> = field.occupied_cells().collect();
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&((1, 2, 3), RED)));
        assert!(cells.contains(&((7, 19, 7), RED)));
    }
}
