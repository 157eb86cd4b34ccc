pub mod dictionary;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod path;
pub mod results;
pub mod searcher;

/// Shortest word that may be recorded as a result. The same bound filters the
/// word list at load time so the two thresholds cannot drift apart.
pub const MIN_WORD_LENGTH: usize = 3;
/// Longest path the search will extend, and the longest word kept from a word list.
pub const MAX_WORD_LENGTH: usize = 16;

pub use self::dictionary::Dictionary;
pub use self::error::SolverError;
pub use self::grid::{Grid, Position};
pub use self::matcher::Matcher;
pub use self::path::PathState;
pub use self::results::ResultSet;
pub use self::searcher::Searcher;
