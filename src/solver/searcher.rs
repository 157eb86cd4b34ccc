use rayon::prelude::*;

use super::dictionary::Dictionary;
use super::grid::Grid;
use super::path::PathState;
use super::results::ResultSet;
use super::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// Primary strategy: exhaustive depth-first exploration from every cell.
/// Each step extends the path through an unused neighbor and asks the
/// dictionary whether the accumulated letters form a word. Branches are
/// dropped as soon as no dictionary word starts with the letters so far,
/// which keeps the depth-16 walk from chasing dead prefixes.
pub struct Searcher<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
}

impl<'a> Searcher<'a> {
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self { grid, dictionary }
    }

    /// Explores from every cell in row-major order and returns every word
    /// found, deduplicated.
    pub fn search_all(&self) -> ResultSet {
        let mut results = ResultSet::new();
        let mut path = PathState::new(self.grid.cell_count());
        for start in self.grid.cell_indices() {
            self.explore(start, &mut path, &mut results);
            debug_assert!(path.is_clear(), "path marks leaked past start {}", start);
        }
        results
    }

    /// One worker per start cell. Each worker walks its own path state, so
    /// the only shared data is the read-only grid and dictionary; per-worker
    /// result sets are merged at the end.
    pub fn search_all_parallel(&self) -> ResultSet {
        self.grid
            .cell_indices()
            .into_par_iter()
            .map(|start| {
                let mut results = ResultSet::new();
                let mut path = PathState::new(self.grid.cell_count());
                self.explore(start, &mut path, &mut results);
                results
            })
            .reduce(ResultSet::new, ResultSet::merge)
    }

    fn explore(&self, idx: usize, path: &mut PathState, results: &mut ResultSet) {
        path.visit(idx, self.grid.letter(idx));

        // The minimum length gates recording only. Shorter paths keep
        // extending, so a two-letter prefix still reaches the words below it.
        if path.len() >= MIN_WORD_LENGTH && self.dictionary.contains(path.word()) {
            results.insert(path.word().to_string());
        }

        if path.len() < MAX_WORD_LENGTH && self.dictionary.has_prefix(path.word()) {
            for &n in self.grid.neighbors(idx) {
                if !path.is_used(n) {
                    self.explore(n, path, results);
                }
            }
        }

        path.retreat(idx);
    }
}
