//! Scoring module - points from piece placement and layer clears.
//!
//! Both bonuses apply on the same locking event; they are pure additions, so
//! order does not matter.

/// Points per block of a locked piece.
pub const PLACEMENT_POINTS_PER_BLOCK: u32 = 10;

/// Layer-clear bonuses for 0..=4 simultaneous layers.
pub const LAYER_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Flat per-layer bonus beyond four simultaneous clears.
pub const EXTRA_LAYER_POINTS: u32 = 100;

/// Placement bonus: 10 points per block in the locked piece.
pub fn placement_score(blocks: usize) -> u32 {
    blocks as u32 * PLACEMENT_POINTS_PER_BLOCK
}

/// Layer-clear bonus keyed by clear count.
///
/// {1 -> 100, 2 -> 300, 3 -> 500, 4 -> 800}; beyond four, 100 points per
/// layer with no superlinear bonus.
pub fn layer_clear_score(layers: usize) -> u32 {
    match layers {
        0..=4 => LAYER_SCORES[layers],
        n => n as u32 * EXTRA_LAYER_POINTS,
    }
}

/// Total score delta for one locking event.
pub fn lock_score(blocks: usize, layers_cleared: usize) -> u32 {
    placement_score(blocks) + layer_clear_score(layers_cleared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_score() {
        assert_eq!(placement_score(4), 40);
        assert_eq!(placement_score(8), 80);
        assert_eq!(placement_score(0), 0);
    }

    #[test]
    fn test_layer_clear_table() {
        assert_eq!(layer_clear_score(0), 0);
        assert_eq!(layer_clear_score(1), 100);
        assert_eq!(layer_clear_score(2), 300);
        assert_eq!(layer_clear_score(3), 500);
        assert_eq!(layer_clear_score(4), 800);
    }

    #[test]
    fn test_layer_clear_beyond_four_is_linear() {
        assert_eq!(layer_clear_score(5), 500);
        assert_eq!(layer_clear_score(6), 600);
        assert_eq!(layer_clear_score(20), 2000);
    }

    #[test]
    fn test_lock_score_combines_both() {
        assert_eq!(lock_score(4, 0), 40);
        assert_eq!(lock_score(4, 1), 140);
        assert_eq!(lock_score(4, 4), 840);
        assert_eq!(lock_score(4, 5), 540);
        assert_eq!(lock_score(8, 1), 180);
    }
}
