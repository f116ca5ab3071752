use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, FactError>`.
pub type FactResult<T> = Result<T, FactError>;

/// Errors that can occur while loading the fact collection.
///
/// Every variant is fatal for the command-line frontend: it prints the
/// message on one line and exits with a non-zero status.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    /// The data file does not exist at the resolved path.
    #[error("could not find {}", path.display())]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The data file exists but is not a well-formed fact document.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error, including line and column.
        source: serde_json::Error,
    },

    /// The data file parsed to zero facts.
    #[error("no facts found")]
    EmptyCollection,

    /// Reading the data file failed for a reason other than absence.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The location of the running executable could not be determined.
    #[error("cannot locate the program directory: {0}")]
    ExecutablePath(io::Error),
}
