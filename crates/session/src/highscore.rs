//! High-score board: a capacity-bounded, descending-sorted score table.
//!
//! The board is pure in-memory state; durability belongs to a
//! [`ScoreStore`](crate::store::ScoreStore) collaborator.

use voxtris_types::{HighScoreEntry, MAX_HIGHSCORES};

/// Top scores, sorted descending, at most [`MAX_HIGHSCORES`] entries.
#[derive(Debug, Clone, Default)]
pub struct HighScoreBoard {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt previously persisted entries, re-establishing order and bound.
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGHSCORES);
        Self { entries }
    }

    /// Offer a candidate score. Returns true if it made the table (a "new
    /// record" for display purposes).
    ///
    /// Ties at the cut line are broken arbitrarily.
    pub fn submit(&mut self, score: u32, timestamp: u64) -> bool {
        let qualifies = self.entries.len() < MAX_HIGHSCORES
            || self
                .entries
                .iter()
                .map(|e| e.score)
                .min()
                .is_some_and(|lowest| score > lowest);

        if qualifies {
            self.entries.push(HighScoreEntry { score, timestamp });
            self.entries.sort_by(|a, b| b.score.cmp(&a.score));
            self.entries.truncate(MAX_HIGHSCORES);
        }
        qualifies
    }

    /// The top `n` entries, best first.
    pub fn top(&self, n: usize) -> &[HighScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_sorts_descending() {
        let mut board = HighScoreBoard::new();
        assert!(board.submit(100, 1));
        assert!(board.submit(300, 2));
        assert!(board.submit(200, 3));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![300, 200, 100]);
    }

    #[test]
    fn test_capacity_bound() {
        let mut board = HighScoreBoard::new();
        for i in 0..MAX_HIGHSCORES as u32 {
            assert!(board.submit(i * 10, i as u64));
        }
        assert_eq!(board.entries().len(), MAX_HIGHSCORES);

        // Too low to qualify once full.
        assert!(!board.submit(0, 99));
        assert_eq!(board.entries().len(), MAX_HIGHSCORES);

        // High enough displaces the lowest.
        assert!(board.submit(1000, 100));
        assert_eq!(board.entries().len(), MAX_HIGHSCORES);
        assert_eq!(board.entries()[0].score, 1000);
    }

    #[test]
    fn test_top_n_clamps() {
        let mut board = HighScoreBoard::new();
        board.submit(5, 0);
        assert_eq!(board.top(3).len(), 1);
        assert_eq!(board.top(0).len(), 0);
    }

    #[test]
    fn test_from_entries_restores_invariants() {
        let entries = (0..20)
            .map(|i| HighScoreEntry {
                score: i,
                timestamp: i as u64,
            })
            .collect();
        let board = HighScoreBoard::from_entries(entries);
        assert_eq!(board.entries().len(), MAX_HIGHSCORES);
        assert_eq!(board.entries()[0].score, 19);
    }
}
