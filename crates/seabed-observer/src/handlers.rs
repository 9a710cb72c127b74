//! REST API endpoint handlers for the Seabed server.
//!
//! All handlers read from the immutable [`AppState`]. Drill requests
//! replay the scenario into state owned by the request.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/world` | Land and water tiles |
//! | `GET` | `/api/layers` | Loaded layers with day counts |
//! | `GET` | `/api/{resource}/{day}` | One daily snapshot, or `average` |
//! | `GET` | `/api/drill/{day}` | Drill scenario replayed through a day |

// Axum handlers are async by signature even when they never await.
#![allow(clippy::unused_async)]

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use seabed_core::DrillPlan;
use seabed_types::{CellReading, DrillView, LayerView, ResourceKind, WorldView};
use seabed_world::ResourceMap;
use tracing::debug;

use crate::error::ObserverError;
use crate::state::AppState;

/// Path segment selecting the averaged layer instead of a single day.
pub const AVERAGE_DAY: &str = "average";

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/drill/{day}` endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct DrillQuery {
    /// Seed for this replay; the configured seed when absent.
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page listing the loaded layers and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let world = state.dataset.world();
    let (width, height) = (world.width(), world.height());

    let mut layers = String::new();
    for summary in state.dataset.summaries() {
        let slug = summary.resource.slug();
        let _ = writeln!(
            layers,
            r#"        <li><a href="/api/{slug}/1">/api/{slug}/1</a> ({days} days, <a href="/api/{slug}/average">average</a>)</li>"#,
            days = summary.days,
        );
    }

    let scenario = state.plan.as_ref().map_or_else(
        || String::from("no drill scenario loaded"),
        |plan| {
            let scenario = plan.scenario();
            let preserve = scenario
                .preserve
                .map_or_else(|| String::from("nothing"), |kind| kind.to_string());
            format!(
                "{count} drill(s) after {target}, sparing {preserve}, over {days} days",
                count = scenario.count,
                target = scenario.target,
                days = plan.days(),
            )
        },
    );

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Seabed</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Seabed</h1>
    <p class="subtitle">{width} x {height} world -- {scenario}</p>

    <h3>Endpoints</h3>
    <ul>
        <li><a href="/api/world">/api/world</a></li>
        <li><a href="/api/layers">/api/layers</a></li>
        <li><a href="/api/drill/1">/api/drill/1</a></li>
    </ul>

    <h3>Layers</h3>
    <ul>
{layers}    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/world -- land and water tiles
// ---------------------------------------------------------------------------

/// Return the grid size with every land and water tile.
pub async fn get_world(State(state): State<Arc<AppState>>) -> Json<WorldView> {
    let world = state.dataset.world();
    Json(WorldView {
        width: world.width(),
        height: world.height(),
        land: world.land_cells(),
        water: world.ocean_cells(),
    })
}

// ---------------------------------------------------------------------------
// GET /api/layers -- loaded layers
// ---------------------------------------------------------------------------

/// List every loaded layer with its number of daily snapshots.
pub async fn list_layers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let layers = state.dataset.summaries();
    Json(serde_json::json!({
        "count": layers.len(),
        "layers": layers,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/{resource}/{day} -- one snapshot
// ---------------------------------------------------------------------------

/// Return the non-empty cells of one layer on a 1-indexed day, or of its
/// average when `day` is `average`.
pub async fn get_layer(
    State(state): State<Arc<AppState>>,
    Path((resource, day)): Path<(String, String)>,
) -> Result<Json<LayerView>, ObserverError> {
    let kind = ResourceKind::from_slug(&resource)
        .ok_or_else(|| ObserverError::NotFound(format!("resource layer `{resource}`")))?;

    let (label, map) = if day.eq_ignore_ascii_case(AVERAGE_DAY) {
        (AVERAGE_DAY.to_owned(), state.dataset.average(kind)?)
    } else {
        let n = parse_day(&day)?;
        (n.to_string(), state.dataset.day(kind, n)?)
    };

    Ok(Json(layer_view(kind, label, map)))
}

fn layer_view(resource: ResourceKind, day: String, map: &ResourceMap) -> LayerView {
    let cells = map
        .present()
        .map(|(at, reading)| CellReading {
            x: at.x,
            y: at.y,
            value: reading.known(),
        })
        .collect();

    LayerView {
        resource,
        day,
        width: map.width(),
        height: map.height(),
        cells,
    }
}

// ---------------------------------------------------------------------------
// GET /api/drill/{day} -- drill replay
// ---------------------------------------------------------------------------

/// Replay the drill scenario through a 1-indexed day and return every
/// drill's position and tallies.
pub async fn get_drill(
    State(state): State<Arc<AppState>>,
    Path(day): Path<String>,
    query: Result<Query<DrillQuery>, QueryRejection>,
) -> Result<Json<DrillView>, ObserverError> {
    let day = parse_day(&day)?;
    let Query(params) = query.map_err(|e| ObserverError::InvalidQuery(e.body_text()))?;
    let plan = state
        .plan
        .as_ref()
        .ok_or_else(|| ObserverError::NotFound("drill scenario".to_owned()))?;

    Ok(Json(replay(plan, day, params.seed)?))
}

fn replay(plan: &DrillPlan, day: usize, seed: Option<u64>) -> Result<DrillView, ObserverError> {
    let scenario = plan.scenario();
    let seed = seed.unwrap_or(scenario.seed);
    let run = plan.simulate_through(day, seed)?;
    debug!(day, seed, drills = run.drills().len(), "Drill replay served");

    Ok(DrillView {
        day: run.day(),
        target: scenario.target,
        preserve: scenario.preserve,
        seed: run.seed(),
        drills: run.records(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a 1-indexed day path segment.
///
/// Anything that is not a non-negative integer is a bad request. Zero
/// parses, and is reported as not found by the lookup it feeds.
fn parse_day(s: &str) -> Result<usize, ObserverError> {
    s.parse::<usize>()
        .map_err(|e| ObserverError::InvalidQuery(format!("day `{s}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_integers_only() {
        assert_eq!(parse_day("3").ok(), Some(3));
        assert_eq!(parse_day("0").ok(), Some(0));
        assert!(matches!(parse_day("x"), Err(ObserverError::InvalidQuery(_))));
        assert!(matches!(parse_day("-1"), Err(ObserverError::InvalidQuery(_))));
        assert!(matches!(parse_day("1.5"), Err(ObserverError::InvalidQuery(_))));
    }
}
