use super::dictionary::Dictionary;
use super::grid::Grid;
use super::path::PathState;
use super::results::ResultSet;

/// Alternative strategy: instead of growing paths and asking the dictionary,
/// take each dictionary word and try to trace it on the board. A trace walks
/// candidate cells for the next letter, claiming one and recursing into its
/// unused neighbors; when a claimed cell dead-ends, the scan resumes with the
/// remaining candidates, so every occurrence of a letter gets its turn and
/// the strategy finds exactly the words the depth-first search finds.
///
/// Words come out of the dictionary in hash order, which is not stable across
/// runs. The produced set does not depend on that order.
pub struct Matcher<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
}

impl<'a> Matcher<'a> {
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self { grid, dictionary }
    }

    /// Tries every dictionary word against the board.
    pub fn search_all(&self) -> ResultSet {
        let starts: Vec<usize> = self.grid.cell_indices().collect();
        let mut results = ResultSet::new();
        let mut path = PathState::new(self.grid.cell_count());

        for word in self.dictionary.words() {
            let target: Vec<char> = word.chars().collect();
            if self.match_from(&target, 0, &starts, &mut path) {
                results.insert(word.to_string());
            }
            debug_assert!(path.is_clear(), "path marks leaked tracing {}", word);
        }
        results
    }

    /// True if `word` can be traced as a simple path of adjacent cells.
    pub fn trace(&self, word: &str) -> bool {
        let starts: Vec<usize> = self.grid.cell_indices().collect();
        let target: Vec<char> = word.chars().collect();
        let mut path = PathState::new(self.grid.cell_count());
        self.match_from(&target, 0, &starts, &mut path)
    }

    fn match_from(
        &self,
        target: &[char],
        matched: usize,
        candidates: &[usize],
        path: &mut PathState,
    ) -> bool {
        if matched == target.len() {
            return true;
        }
        let wanted = target[matched];
        for &idx in candidates {
            if path.is_used(idx) || self.grid.letter(idx) != wanted {
                continue;
            }
            path.visit(idx, wanted);
            let found = self.match_from(target, matched + 1, self.grid.neighbors(idx), path);
            path.retreat(idx);
            if found {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_words_on_a_2x2_board() {
        let grid = Grid::new("cats".chars().collect(), 2).unwrap();
        let dict = Dictionary::from_lines(["cat", "cats", "at", "ta"]);
        let results = Matcher::new(&grid, &dict).search_all();
        assert_eq!(results.into_sorted_vec(), vec!["cat", "cats"]);
    }

    #[test]
    fn empty_word_traces_trivially() {
        let grid = Grid::new("cats".chars().collect(), 2).unwrap();
        let dict = Dictionary::from_lines(["cat"]);
        assert!(Matcher::new(&grid, &dict).trace(""));
    }

    #[test]
    fn backtracks_past_a_dead_end_first_letter() {
        // The t at (0,0) has no o beside it; only the t at (2,2) starts "top".
        // The candidate scan must move on after the first t fails.
        let grid = Grid::new("txxxxxpot".chars().collect(), 3).unwrap();
        let dict = Dictionary::from_lines(["top"]);
        let results = Matcher::new(&grid, &dict).search_all();
        assert_eq!(results.into_sorted_vec(), vec!["top"]);
    }

    #[test]
    fn does_not_reuse_a_cell_within_one_trace() {
        // "pop" needs two p cells around the single o; "popo" would need two o
        let grid = Grid::new("popx".chars().collect(), 2).unwrap();
        let dict = Dictionary::from_lines(["pop", "popo"]);
        let results = Matcher::new(&grid, &dict).search_all();
        assert_eq!(results.into_sorted_vec(), vec!["pop"]);
    }

    #[test]
    fn word_absent_from_board_is_rejected() {
        let grid = Grid::new("cats".chars().collect(), 2).unwrap();
        let dict = Dictionary::from_lines(["dog"]);
        assert!(Matcher::new(&grid, &dict).search_all().is_empty());
    }
}
