use crate::db::{PredictionRecord, RecommendationRecord, RiskDistribution};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    user_id: Uuid,
    risk_summary: RiskDistribution,
    predictions: Vec<PredictionRecord>,
    recommendations: Vec<RecommendationRecord>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/:user_id/dashboard", get(dashboard))
        .with_state(state)
}

async fn dashboard(
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
) -> Json<DashboardResponse> {
    let history = state.store.user_history(user_id).await;

    let mut risk_summary = RiskDistribution::default();
    for prediction in &history.predictions {
        risk_summary.record(prediction.risk.risk_level);
    }

    Json(DashboardResponse {
        user_id,
        risk_summary,
        predictions: history.predictions,
        recommendations: history.recommendations,
    })
}
