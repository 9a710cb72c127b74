//! Shared application state for the Seabed API server.
//!
//! [`AppState`] is built once at startup and never mutated. The dataset is
//! behind an [`Arc`] so the engine and the router can share it, and the
//! drill plan holds only prepared maps; every drill request starts its own
//! run from a seed.

use std::sync::Arc;

use seabed_core::{Dataset, DrillPlan};

/// Read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded world and resource layers.
    pub dataset: Arc<Dataset>,
    /// The configured drill scenario, if its layers were loaded.
    pub plan: Option<DrillPlan>,
}

impl AppState {
    /// Create state serving `dataset` and, when present, the drill `plan`.
    pub const fn new(dataset: Arc<Dataset>, plan: Option<DrillPlan>) -> Self {
        Self { dataset, plan }
    }
}
