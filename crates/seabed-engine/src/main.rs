//! Seabed binary.
//!
//! Loads configuration, reads the world and resource snapshots, prepares
//! the drill scenario, and serves the read-only API until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `seabed-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Load the world grid and every configured resource layer
//! 4. Prepare the drill scenario
//! 5. Serve the API

mod error;

use std::path::Path;
use std::sync::Arc;

use seabed_core::{Dataset, DrillPlan, LoggingConfig, Scenario, SeabedConfig};
use seabed_observer::{AppState, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const CONFIG_FILE: &str = "seabed-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, data loading, or the server fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration. Logging is not up yet, so report where the
    //    config came from once it is.
    let config_path = Path::new(CONFIG_FILE);
    let from_file = config_path.exists();
    let config = if from_file {
        SeabedConfig::from_file(config_path)?
    } else {
        SeabedConfig::parse("")?
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("seabed-engine starting");
    if from_file {
        info!(path = CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Load snapshot data.
    let dataset = Dataset::load(&config.data)?;
    info!(
        data_dir = %config.data.dir.display(),
        width = dataset.world().width(),
        height = dataset.world().height(),
        layers = dataset.summaries().len(),
        "Dataset loaded"
    );

    // 4. Prepare the drill scenario. A missing layer only disables drills.
    let scenario = Scenario::from(&config.drill);
    let plan = match DrillPlan::prepare(&dataset, scenario) {
        Ok(plan) => {
            info!(
                target_layer = %scenario.target,
                preserve = ?scenario.preserve,
                drills = scenario.count,
                strategy = ?scenario.strategy,
                days = plan.days(),
                "Drill scenario prepared"
            );
            Some(plan)
        }
        Err(e) => {
            warn!(error = %e, "Drill scenario unavailable, /api/drill disabled");
            None
        }
    };

    // 5. Serve.
    let state = Arc::new(AppState::new(Arc::new(dataset), plan));
    let server = ServerConfig::from(&config.server);
    seabed_observer::start_server(&server, state).await?;

    info!("seabed-engine stopped");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
