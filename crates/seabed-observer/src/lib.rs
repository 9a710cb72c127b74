//! Read-only HTTP API for the Seabed simulation.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **World endpoint** (`/api/world`) with the land and water tiles
//! - **Layer endpoints** (`/api/layers`, `/api/{resource}/{day}`) serving
//!   land-masked daily snapshots and their averages
//! - **Drill endpoint** (`/api/drill/{day}`) replaying the configured drill
//!   scenario through a day
//! - **Minimal HTML page** (`GET /`) listing the loaded layers and links
//!
//! # Architecture
//!
//! Everything the server reads is loaded once at startup into an immutable
//! [`AppState`]. Drill requests replay the scenario from a seed into
//! request-owned state, so handlers never take a lock and concurrent
//! requests cannot observe each other.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
