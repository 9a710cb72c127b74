//! Error types for the `seabed-core` crate.

use seabed_world::WorldError;

/// Errors raised while preparing or running drill simulations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Loading or combining grid data failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A resource layer or day index does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The simulation reached a state it cannot continue from, such as a
    /// drill with no reachable cells.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
