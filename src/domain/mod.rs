pub mod assessment;
pub mod bmi;
pub mod plan;
pub mod risk;
