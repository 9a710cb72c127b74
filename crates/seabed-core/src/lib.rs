//! Drill agents, configuration, and day-by-day orchestration for the Seabed
//! simulation.
//!
//! This crate turns the raw layers from `seabed-world` into a loaded
//! [`Dataset`] and runs drill scenarios against it.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `seabed-config.yaml` into
//!   strongly-typed structs.
//! - [`dataset`] -- The world grid plus every land-masked resource series and
//!   its average.
//! - [`drill`] -- A single drill agent: neighbourhood, movement, tallies.
//! - [`error`] -- [`CoreError`].
//! - [`simulation`] -- [`DrillPlan`] and replayable [`DrillRun`]s.
//! - [`strategy`] -- [`Strategy`] movement policies.

pub mod config;
pub mod dataset;
pub mod drill;
pub mod error;
pub mod simulation;
pub mod strategy;

pub use config::{
    ConfigError, DataConfig, DrillConfig, LayerConfig, LoggingConfig, SeabedConfig,
    ServerSettings,
};
pub use dataset::Dataset;
pub use drill::{Drill, REACH};
pub use error::CoreError;
pub use simulation::{DrillPlan, DrillRun, Scenario};
pub use strategy::{Neighbourhood, Strategy};
