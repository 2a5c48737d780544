//! Error types for swarnam

use thiserror::Error;

/// Result type alias for host-level swarnam operations
pub type Result<T> = std::result::Result<T, SwarnamError>;

/// Reasons a block cannot be split into a valid segment set
///
/// The `Display` text of each variant is the diagnostic shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// More than two sentinel lines were found
    #[error("more than 3 segments present")]
    TooManySegments {
        /// Number of pieces beyond the third
        extra: usize,
    },

    /// The markup segment is empty after trimming
    #[error("first segment (markup) is empty")]
    MissingMarkup,
}

/// Host error types
#[derive(Error, Debug)]
pub enum SwarnamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Split(#[from] SplitError),

    #[error("{0}")]
    Message(String),
}
