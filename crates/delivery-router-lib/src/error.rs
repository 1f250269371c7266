use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the delivery router library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location is created or added with an empty name.
    #[error("location name must not be empty")]
    EmptyLocationName,

    /// Raised when a route distance is negative, NaN, or infinite.
    #[error("route distance must be a non-negative finite number, got {distance}")]
    InvalidDistance { distance: f64 },

    /// Raised when a route would connect a location to itself.
    #[error("a route cannot connect {name} to itself")]
    SelfLoop { name: String },

    /// Raised when an operation references a location that was never added.
    #[error("unknown location: {name}")]
    UnknownLocation { name: String },

    /// No suitable project directories could be resolved for the history file.
    #[error("failed to resolve project directories for the route history")]
    HistoryDirsUnavailable,

    /// Raised when the persisted history exists but cannot be parsed.
    #[error("failed to parse route history at {path}: {source}")]
    HistoryParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Raised when encoding the history sequence for persistence fails.
    #[error("failed to encode route history for {path}: {source}")]
    HistoryEncode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
