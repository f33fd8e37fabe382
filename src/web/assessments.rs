use super::ApiError;
use crate::db::Submission;
use crate::domain::assessment::{HealthAssessment, Profile};
use crate::middleware::rate_limit::rate_limit_middleware;
use crate::services::evaluation::evaluate;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct SubmissionPayload {
    user_id: Uuid,
    profile: Profile,
    assessment: HealthAssessment,
}

pub fn router(state: SharedState) -> Router {
    let limited_submit = post(submit).layer(middleware::from_fn_with_state(
        state.limiter.clone(),
        rate_limit_middleware,
    ));

    Router::new()
        .route("/", limited_submit)
        .route("/sample", get(sample))
        .route("/:id", get(find))
        .with_state(state)
}

async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<(StatusCode, Json<Submission>), ApiError> {
    let SubmissionPayload {
        user_id,
        profile,
        assessment,
    } = payload;

    assessment.validate().map_err(|e| {
        tracing::warn!("Rejected assessment for user {}: {}", user_id, e);
        ApiError::from(e)
    })?;

    let evaluation = evaluate(&assessment, &profile).map_err(|e| {
        tracing::warn!("Evaluation refused for user {}: {}", user_id, e);
        ApiError::from(e)
    })?;

    let submission = Submission::build(user_id, assessment, evaluation, Utc::now());
    tracing::info!(
        "Assessment {} scored for user {} (bmi {:.1}): {}",
        submission.assessment.id,
        user_id,
        submission.assessment.bmi,
        submission
            .predictions
            .iter()
            .map(|p| format!("{}={}", p.risk.disease_type, p.risk.risk_level))
            .collect::<Vec<_>>()
            .join(", ")
    );

    state.store.save_submission(submission.clone()).await;
    Ok((StatusCode::CREATED, Json(submission)))
}

async fn sample() -> Json<HealthAssessment> {
    Json(HealthAssessment::sample())
}

async fn find(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, ApiError> {
    state
        .store
        .find_submission(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("assessment"))
}
