pub mod diet;
pub mod evaluation;
pub mod fitness;
pub mod recommendation;
pub mod schedule;
pub mod wellbeing;
