//! Integration tests for the Seabed API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use seabed_core::{Dataset, DrillPlan, Scenario, Strategy};
use seabed_observer::router::build_router;
use seabed_observer::state::AppState;
use seabed_types::{Coord, Reading, ResourceKind, TileKind};
use seabed_world::{Grid, ResourceMap, ResourceSeries, WorldGrid};
use serde_json::Value;
use tower::ServiceExt;

const SIZE: usize = 12;

fn layer(kind: ResourceKind, base: f64, spots: &[(usize, usize, f64)]) -> ResourceMap {
    let mut map = ResourceMap::empty(kind, SIZE, SIZE);
    for x in 0..SIZE {
        for y in 0..SIZE {
            map.set(Coord::new(x, y), Some(Reading::Known(base)));
        }
    }
    for &(x, y, v) in spots {
        map.set(Coord::new(x, y), Some(Reading::Known(v)));
    }
    map
}

/// 12x12 ocean with one land tile at the origin, two days of oil and
/// two days of flat coral.
fn make_dataset() -> Dataset {
    let mut tiles = Grid::filled(SIZE, SIZE, TileKind::Ocean);
    tiles.set(Coord::new(0, 0), TileKind::Land);
    let world = WorldGrid::from_tiles(tiles);

    let oil = ResourceSeries::new(
        ResourceKind::Oil,
        vec![
            layer(ResourceKind::Oil, 1.0, &[(5, 5, 9.0)]),
            layer(ResourceKind::Oil, 1.0, &[(7, 7, 4.0)]),
        ],
    );
    let mut coral_day_one = layer(ResourceKind::Coral, 0.0, &[]);
    coral_day_one.set(Coord::new(3, 3), Some(Reading::Unknown));
    let coral = ResourceSeries::new(
        ResourceKind::Coral,
        vec![coral_day_one, layer(ResourceKind::Coral, 0.0, &[])],
    );

    Dataset::from_parts(world, vec![oil, coral]).unwrap()
}

fn make_test_state() -> Arc<AppState> {
    let dataset = make_dataset();
    let scenario = Scenario {
        target: ResourceKind::Oil,
        preserve: Some(ResourceKind::Coral),
        count: 1,
        strategy: Strategy::Max,
        seed: 42,
    };
    let plan = DrillPlan::prepare(&dataset, scenario).unwrap();
    Arc::new(AppState::new(Arc::new(dataset), Some(plan)))
}

async fn get(state: Arc<AppState>, path: &str) -> (StatusCode, Value) {
    let response = build_router(state)
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn cell_at(json: &Value, x: usize, y: usize) -> Option<Value> {
    json["cells"]
        .as_array()?
        .iter()
        .find(|c| c["x"] == x && c["y"] == y)
        .map(|c| c["value"].clone())
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_get_world() {
    let (status, json) = get(make_test_state(), "/api/world").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["width"], 12);
    assert_eq!(json["height"], 12);
    assert_eq!(json["land"].as_array().unwrap().len(), 1);
    assert_eq!(json["land"][0]["x"], 0);
    assert_eq!(json["land"][0]["y"], 0);
    assert_eq!(json["water"].as_array().unwrap().len(), 143);
}

#[tokio::test]
async fn test_list_layers() {
    let (status, json) = get(make_test_state(), "/api/layers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["layers"][0]["resource"], "oil");
    assert_eq!(json["layers"][0]["days"], 2);
}

#[tokio::test]
async fn test_get_layer_day_is_land_masked() {
    let (status, json) = get(make_test_state(), "/api/oil/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resource"], "oil");
    assert_eq!(json["day"], "1");
    assert_eq!(json["cells"].as_array().unwrap().len(), 143);
    assert_eq!(cell_at(&json, 0, 0), None);
    assert_eq!(cell_at(&json, 5, 5), Some(Value::from(9.0)));
}

#[tokio::test]
async fn test_get_layer_average() {
    let (status, json) = get(make_test_state(), "/api/oil/average").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"], "average");
    assert_eq!(cell_at(&json, 5, 5), Some(Value::from(5.0)));
    assert_eq!(cell_at(&json, 7, 7), Some(Value::from(2.5)));
}

#[tokio::test]
async fn test_get_layer_unknown_reading_is_null() {
    let (status, json) = get(make_test_state(), "/api/coral/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cell_at(&json, 3, 3), Some(Value::Null));
}

#[tokio::test]
async fn test_get_layer_errors() {
    let state = make_test_state();

    let (status, json) = get(Arc::clone(&state), "/api/oil/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
    assert!(json["error"].is_string());

    let (status, _) = get(Arc::clone(&state), "/api/oil/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(Arc::clone(&state), "/api/gold/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Known resource, but no files were loaded for it.
    let (status, _) = get(Arc::clone(&state), "/api/helium/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get(state, "/api/oil/tuesday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_drill_day_one_is_placement() {
    let (status, json) = get(make_test_state(), "/api/drill/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"], 1);
    assert_eq!(json["target"], "oil");
    assert_eq!(json["preserve"], "coral");
    assert_eq!(json["seed"], 42);
    assert_eq!(json["drills"][0]["x"], 5);
    assert_eq!(json["drills"][0]["y"], 5);
    assert_eq!(json["drills"][0]["collected"], 0.0);
    assert_eq!(json["drills"][0]["destroyed"], 0.0);
}

#[tokio::test]
async fn test_drill_moves_to_best_neighbour() {
    let (status, json) = get(make_test_state(), "/api/drill/2?seed=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["day"], 2);
    assert_eq!(json["seed"], 7);
    assert_eq!(json["drills"][0]["x"], 7);
    assert_eq!(json["drills"][0]["y"], 7);
    assert_eq!(json["drills"][0]["collected"], 4.0);
}

#[tokio::test]
async fn test_drill_replay_is_repeatable() {
    let state = make_test_state();
    let (_, first) = get(Arc::clone(&state), "/api/drill/2").await;
    let (_, second) = get(state, "/api/drill/2").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_drill_errors() {
    let state = make_test_state();

    let (status, _) = get(Arc::clone(&state), "/api/drill/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(Arc::clone(&state), "/api/drill/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(Arc::clone(&state), "/api/drill/soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = get(state, "/api/drill/1?seed=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_drill_without_scenario_is_not_found() {
    let state = Arc::new(AppState::new(Arc::new(make_dataset()), None));
    let (status, json) = get(state, "/api/drill/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}
