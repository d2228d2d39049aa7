//! Read-only HTTP API over the published snapshot.
//!
//! Four queries, all answered from whatever snapshot the store currently
//! publishes; none of them can trigger a fetch or observe a cycle in
//! progress. CORS is wide open — the browser frontend is served from a
//! different origin.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gigmap_core::{Event, Region, SnapshotStore};

/// Shared handler state: the snapshot store plus the static region set.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<SnapshotStore>,
    pub regions: Arc<Vec<Region>>,
}

/// Build the application router.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(events))
        .route("/genres", get(genres))
        .route("/areas", get(areas))
        .route("/cities", get(cities))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Region key → that region's normalized events.
async fn events(State(state): State<ApiState>) -> Json<BTreeMap<String, Vec<Event>>> {
    Json(state.store.current().events_by_region.clone())
}

/// Genre → occurrence count across all regions.
async fn genres(State(state): State<ApiState>) -> Json<BTreeMap<String, u64>> {
    Json(state.store.current().genre_counts.clone())
}

/// Region display name → feed key, for populating area pickers.
async fn areas(State(state): State<ApiState>) -> Json<BTreeMap<String, String>> {
    Json(
        state
            .regions
            .iter()
            .map(|region| (region.name.clone(), region.key.clone()))
            .collect(),
    )
}

/// Region key → city counts, including the synthetic `"all"` table.
async fn cities(
    State(state): State<ApiState>,
) -> Json<BTreeMap<String, BTreeMap<String, u64>>> {
    Json(state.store.current().city_counts.clone())
}
