/// Mutable state of the path currently being walked: which cells are in use
/// and the letters accumulated along them. The used marks live here, not on
/// the cells, so they are owned by the single active search call.
///
/// Invariant: the used set equals exactly the cells of the current path.
/// Every `visit` must be undone by a matching `retreat` before the search
/// returns past it.
#[derive(Debug, Clone)]
pub struct PathState {
    used: Vec<bool>,
    word: String,
}

impl PathState {
    pub fn new(cell_count: usize) -> Self {
        Self {
            used: vec![false; cell_count],
            word: String::new(),
        }
    }

    /// Marks a cell as part of the path and appends its letter.
    pub fn visit(&mut self, idx: usize, letter: char) {
        debug_assert!(!self.used[idx], "cell {} already on the path", idx);
        self.used[idx] = true;
        self.word.push(letter);
    }

    /// Restores a cell to unused and drops its letter. Callers retreat in
    /// reverse visit order, so popping the last letter is always the right one.
    pub fn retreat(&mut self, idx: usize) {
        debug_assert!(self.used[idx], "cell {} not on the path", idx);
        self.used[idx] = false;
        self.word.pop();
    }

    pub fn is_used(&self, idx: usize) -> bool {
        self.used[idx]
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Path length in letters (one per visited cell).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// True when no cell is marked and no letters remain. Holds before and
    /// after every complete search.
    pub fn is_clear(&self) -> bool {
        self.word.is_empty() && self.used.iter().all(|&used| !used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_and_retreat_restore_everything() {
        let mut path = PathState::new(4);
        assert!(path.is_clear());

        path.visit(0, 'c');
        path.visit(3, 'a');
        assert!(path.is_used(0));
        assert!(path.is_used(3));
        assert!(!path.is_used(1));
        assert_eq!(path.word(), "ca");
        assert_eq!(path.len(), 2);

        path.retreat(3);
        assert_eq!(path.word(), "c");
        assert!(!path.is_used(3));

        path.retreat(0);
        assert!(path.is_clear());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn double_visit_panics_in_debug() {
        let mut path = PathState::new(2);
        path.visit(1, 'a');
        path.visit(1, 'a');
    }
}
