use crate::domain::assessment::Profile;
use crate::error::EngineError;

/// `weight / (height_m)^2`. Inputs are expected to be strictly positive;
/// use [`checked_bmi`] at the input boundary.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Validates the profile, computes BMI and refuses non-finite results.
pub fn checked_bmi(profile: &Profile) -> Result<f64, EngineError> {
    profile.validate()?;
    let bmi = compute_bmi(profile.weight, profile.height);
    if !bmi.is_finite() {
        return Err(EngineError::InvalidBmi);
    }
    Ok(bmi)
}
