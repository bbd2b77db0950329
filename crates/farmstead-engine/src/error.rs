//! Error types for the console binary.
//!
//! [`EngineError`] wraps every failure mode between startup and the final
//! status screen, giving `main` a single error type to propagate with `?`.

use farmstead_core::config::ConfigError;
use farmstead_core::{FarmError, SessionError};

/// Top-level error for the console binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The configured farm could not be built.
    #[error("farm error: {source}")]
    Farm {
        /// The underlying farm error.
        #[from]
        source: FarmError,
    },

    /// The game loop stopped early.
    #[error("session error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: SessionError,
    },

    /// Writing to the terminal failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
