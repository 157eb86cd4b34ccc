use std::io;

use thiserror::Error;

/// Failures surfaced before a search begins. The search itself is a pure
/// in-memory walk over already-validated structures and cannot fail; any
/// invariant violation there is a defect covered by debug assertions.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The supplied letters cannot fill a square board of the requested side.
    #[error("a {side}x{side} board needs {expected} letters, got {actual}")]
    InvalidInput {
        side: usize,
        expected: usize,
        actual: usize,
    },

    /// The word list could not be opened or read.
    #[error("word list {path} is unavailable: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },
}
