use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseType {
    Diabetes,
    #[serde(alias = "heart-disease", alias = "heart")]
    HeartDisease,
    Hypertension,
    Obesity,
}

impl DiseaseType {
    /// Evaluation order of the scorers.
    pub const ALL: [DiseaseType; 4] = [
        DiseaseType::Diabetes,
        DiseaseType::HeartDisease,
        DiseaseType::Hypertension,
        DiseaseType::Obesity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseType::Diabetes => "diabetes",
            DiseaseType::HeartDisease => "heart_disease",
            DiseaseType::Hypertension => "hypertension",
            DiseaseType::Obesity => "obesity",
        }
    }
}

impl TryFrom<&str> for DiseaseType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "diabetes" => Ok(DiseaseType::Diabetes),
            "heart_disease" | "heart-disease" | "heart" => Ok(DiseaseType::HeartDisease),
            "hypertension" => Ok(DiseaseType::Hypertension),
            "obesity" => Ok(DiseaseType::Obesity),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DiseaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal risk tier. Variant order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[cfg(test)]
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Maps an additive score onto a tier using two ascending cutoffs.
    pub fn from_score(score: u32, medium_cutoff: u32, high_cutoff: u32) -> Self {
        if score >= high_cutoff {
            RiskLevel::High
        } else if score >= medium_cutoff {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl TryFrom<&str> for RiskLevel {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" | "moderate" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one disease scorer for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskScore {
    pub disease_type: DiseaseType,
    pub risk_level: RiskLevel,
    pub confidence_score: f64,
    pub risk_factors: Vec<String>,
}
