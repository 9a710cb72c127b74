//! Error types for the Seabed binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the Seabed binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: seabed_core::ConfigError,
    },

    /// Loading snapshot data or preparing the drill scenario failed.
    #[error("data error: {source}")]
    Data {
        /// The underlying core error.
        #[from]
        source: seabed_core::CoreError,
    },

    /// The API server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: seabed_observer::ServerError,
    },
}
