//! Shape catalog - the seven canonical 3D piece geometries and their colors.
//!
//! Each shape is an immutable list of integer (dx, dy, dz) block offsets
//! relative to the piece anchor, paired 1:1 with a palette color. Six of the
//! shapes are classic tetrominoes extruded into the volume; the cube is the
//! one genuinely three-dimensional piece (2x2x2, eight blocks).

use voxtris_types::Color;

/// Offset of a single block relative to the piece anchor.
pub type BlockOffset = (i8, i8, i8);

/// Number of shapes in the catalog.
pub const SHAPE_COUNT: usize = 7;

/// Largest block count of any catalog shape (the cube).
pub const MAX_BLOCKS: usize = 8;

/// The seven canonical shapes, indexed 0..SHAPE_COUNT.
pub const SHAPES: [&[BlockOffset]; SHAPE_COUNT] = [
    // I: four in a line
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)],
    // Cube: 2x2x2
    &[
        (0, 0, 0),
        (1, 0, 0),
        (0, 1, 0),
        (1, 1, 0),
        (0, 0, 1),
        (1, 0, 1),
        (0, 1, 1),
        (1, 1, 1),
    ],
    // L
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0)],
    // J: mirrored L
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0)],
    // T
    &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)],
    // S
    &[(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0)],
    // Z
    &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0)],
];

/// Palette paired 1:1 with `SHAPES`.
pub const PALETTE: [Color; SHAPE_COUNT] = [
    Color::new(0.0, 1.0, 1.0),   // cyan (I)
    Color::new(1.0, 1.0, 0.0),   // yellow (cube)
    Color::new(1.0, 0.647, 0.0), // orange (L)
    Color::new(0.0, 0.0, 1.0),   // blue (J)
    Color::new(0.5, 0.0, 0.5),   // purple (T)
    Color::new(0.0, 1.0, 0.0),   // green (S)
    Color::new(1.0, 0.0, 0.0),   // red (Z)
];

/// Look up a shape's offsets and color by catalog index.
///
/// Indices come from the bag randomizer and are bounded by `SHAPE_COUNT` by
/// construction, so this is total over its callers.
pub fn shape(index: usize) -> (&'static [BlockOffset], Color) {
    (SHAPES[index], PALETTE[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape_sizes() {
        for (i, blocks) in SHAPES.iter().enumerate() {
            if i == 1 {
                assert_eq!(blocks.len(), 8, "cube has eight blocks");
            } else {
                assert_eq!(blocks.len(), 4, "shape {} has four blocks", i);
            }
            assert!(blocks.len() <= MAX_BLOCKS);
        }
    }

    #[test]
    fn test_catalog_offsets_are_distinct() {
        for blocks in SHAPES.iter() {
            for (i, a) in blocks.iter().enumerate() {
                for b in blocks.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_catalog_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in PALETTE.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
