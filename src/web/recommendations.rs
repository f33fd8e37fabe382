use super::ApiError;
use crate::domain::plan::RecommendationPlan;
use crate::domain::risk::RiskLevel;
use crate::services::recommendation::assemble_for_label;
use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};

pub fn router() -> Router {
    Router::new().route("/:disease/:level", get(preview))
}

/// Plan preview for any (disease, level) pair without submitting an assessment.
async fn preview(
    Path((disease, level)): Path<(String, String)>,
) -> Result<Json<RecommendationPlan>, ApiError> {
    let level = RiskLevel::try_from(level.as_str()).map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("unknown risk level: {}", level),
        )
    })?;
    Ok(Json(assemble_for_label(&disease, level)))
}

#[cfg(test)]
mod tests {
    use crate::web::test_support::{app, get, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn heart_disease_high_preview() {
        let (status, body) = send(&app(), get("/api/recommendations/heart_disease/high")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fitness_plan"]["exercises"].as_array().unwrap().len(), 5);
        assert_eq!(body["fitness_plan"]["duration_weeks"], 16);
        assert_eq!(body["diet_plan"]["calories_target"], 1600);
        assert_eq!(body["diet_plan"]["meals"][0]["notes"], "Rich in omega-3 and fiber");
        assert_eq!(body["weekly_schedule"]["Friday"]["evening"][2], "Wind down");
    }

    #[tokio::test]
    async fn unknown_disease_uses_fallback_menu() {
        let (status, body) = send(&app(), get("/api/recommendations/gout/low")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["diet_plan"]["meals"][0]["notes"],
            "Focus on low glycemic index foods"
        );
    }

    #[tokio::test]
    async fn unknown_level_is_rejected() {
        let (status, body) = send(&app(), get("/api/recommendations/obesity/extreme")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("extreme"));
    }
}
