//! In-memory keyed record store for submitted assessments and their derived
//! predictions and recommendations.

use crate::domain::assessment::HealthAssessment;
use crate::domain::plan::RecommendationPlan;
use crate::domain::risk::{DiseaseType, RiskLevel, RiskScore};
use crate::services::evaluation::Evaluation;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const ASSESSMENT_TYPE: &str = "comprehensive";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_type: String,
    pub bmi: f64,
    #[serde(flatten)]
    pub assessment: HealthAssessment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub risk: RiskScore,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub prediction_id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub plan: RecommendationPlan,
    pub created_at: DateTime<Utc>,
}

/// One assessment with its four predictions and four recommendations.
/// Stored and read back as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub assessment: AssessmentRecord,
    pub predictions: Vec<PredictionRecord>,
    pub recommendations: Vec<RecommendationRecord>,
}

impl Submission {
    pub fn build(
        user_id: Uuid,
        assessment: HealthAssessment,
        evaluation: Evaluation,
        created_at: DateTime<Utc>,
    ) -> Self {
        let assessment_id = Uuid::new_v4();
        let mut predictions = Vec::with_capacity(evaluation.outcomes.len());
        let mut recommendations = Vec::with_capacity(evaluation.outcomes.len());

        for outcome in evaluation.outcomes {
            let prediction_id = Uuid::new_v4();
            predictions.push(PredictionRecord {
                id: prediction_id,
                assessment_id,
                user_id,
                risk: outcome.risk,
                created_at,
            });
            recommendations.push(RecommendationRecord {
                id: Uuid::new_v4(),
                prediction_id,
                user_id,
                plan: outcome.plan,
                created_at,
            });
        }

        Self {
            assessment: AssessmentRecord {
                id: assessment_id,
                user_id,
                assessment_type: ASSESSMENT_TYPE.to_string(),
                bmi: evaluation.bmi,
                assessment,
                created_at,
            },
            predictions,
            recommendations,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHistory {
    pub predictions: Vec<PredictionRecord>,
    pub recommendations: Vec<RecommendationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_users: usize,
    pub total_assessments: usize,
    pub recent_assessments: usize,
    pub high_risk_predictions: usize,
    pub risk_distribution: RiskDistribution,
    pub disease_distribution: BTreeMap<DiseaseType, usize>,
}

#[derive(Default)]
struct StoreInner {
    submissions: HashMap<Uuid, Submission>,
    // user_id -> assessment ids, oldest first
    by_user: HashMap<Uuid, Vec<Uuid>>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save_submission(&self, submission: Submission) {
        let mut inner = self.inner.write().await;
        let id = submission.assessment.id;
        inner
            .by_user
            .entry(submission.assessment.user_id)
            .or_default()
            .push(id);
        inner.submissions.insert(id, submission);
    }

    pub async fn find_submission(&self, assessment_id: Uuid) -> Option<Submission> {
        self.inner
            .read()
            .await
            .submissions
            .get(&assessment_id)
            .cloned()
    }

    /// Predictions and recommendations of one user, newest submission first.
    pub async fn user_history(&self, user_id: Uuid) -> UserHistory {
        let inner = self.inner.read().await;
        let mut history = UserHistory {
            predictions: Vec::new(),
            recommendations: Vec::new(),
        };

        let Some(ids) = inner.by_user.get(&user_id) else {
            return history;
        };

        for submission in ids.iter().rev().filter_map(|id| inner.submissions.get(id)) {
            history.predictions.extend(submission.predictions.iter().cloned());
            history
                .recommendations
                .extend(submission.recommendations.iter().cloned());
        }
        history
    }

    pub async fn stats(&self, now: DateTime<Utc>, recent_window: Duration) -> StoreStats {
        let inner = self.inner.read().await;
        let since = now
            .checked_sub_signed(recent_window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut stats = StoreStats {
            total_users: inner.by_user.len(),
            total_assessments: inner.submissions.len(),
            recent_assessments: 0,
            high_risk_predictions: 0,
            risk_distribution: RiskDistribution::default(),
            disease_distribution: BTreeMap::new(),
        };

        for submission in inner.submissions.values() {
            if submission.assessment.created_at > since {
                stats.recent_assessments += 1;
            }
            for prediction in &submission.predictions {
                stats.risk_distribution.record(prediction.risk.risk_level);
                *stats
                    .disease_distribution
                    .entry(prediction.risk.disease_type)
                    .or_insert(0) += 1;
            }
        }
        stats.high_risk_predictions = stats.risk_distribution.high;
        stats
    }
}
