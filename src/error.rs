use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid profile data: weight={weight}, height={height}")]
    InvalidProfile { weight: f64, height: f64 },
    #[error("invalid BMI calculation result")]
    InvalidBmi,
    #[error("{0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
