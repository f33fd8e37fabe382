use crate::db::StoreStats;
use crate::state::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::{Duration, Utc};

pub fn router(state: SharedState) -> Router {
    Router::new().route("/stats", get(stats)).with_state(state)
}

async fn stats(State(state): State<SharedState>) -> Json<StoreStats> {
    let window = Duration::try_days(state.recent_window_days).unwrap_or(Duration::MAX);
    Json(state.store.stats(Utc::now(), window).await)
}
