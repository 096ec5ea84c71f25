//! Compound interest with monthly capitalization

use serde::{Deserialize, Serialize};

use super::validation::{validate, ValidationError};

/// Whether inputs are checked before computing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Reject non-positive inputs with a `ValidationError`
    #[default]
    Enforced,
    /// Compute whatever is supplied (used to simulate faulty inputs)
    Disabled,
}

/// Final amount of a loan after `months` of monthly compounding
///
/// `monthly_rate_percent` is a percentage, so `2.5` means 2.5% per month.
/// Inputs must all be strictly positive; the first offending field is
/// reported in the order principal, months, rate.
pub fn compute(principal: f64, months: i32, monthly_rate_percent: f64) -> Result<f64, ValidationError> {
    validate(principal, months, monthly_rate_percent)?;
    Ok(compute_unchecked(principal, months, monthly_rate_percent))
}

/// Apply the compound interest formula without validating inputs
///
/// Overflow and NaN are not guarded: IEEE-754 special values pass through.
pub fn compute_unchecked(principal: f64, months: i32, monthly_rate_percent: f64) -> f64 {
    let rate = monthly_rate_percent / 100.0;
    principal * (1.0 + rate).powf(months as f64)
}

/// Compute under the given validation mode
pub fn compute_with_mode(
    principal: f64,
    months: i32,
    monthly_rate_percent: f64,
    mode: ValidationMode,
) -> Result<f64, ValidationError> {
    match mode {
        ValidationMode::Enforced => compute(principal, months, monthly_rate_percent),
        ValidationMode::Disabled => Ok(compute_unchecked(principal, months, monthly_rate_percent)),
    }
}
