//! Input validation for loan calculations
//!
//! Every input must be strictly positive. Fields are checked in a fixed
//! order (principal, months, rate) and only the first violation is reported.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Loan input fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanField {
    /// Loan principal
    Principal,
    /// Loan term in whole months
    Months,
    /// Monthly interest rate in percent
    MonthlyRate,
}

impl LoanField {
    /// Human-readable field name used in failure messages
    pub fn label(&self) -> &'static str {
        match self {
            LoanField::Principal => "Valor do Empréstimo",
            LoanField::Months => "Número de Meses",
            LoanField::MonthlyRate => "Percentual da Taxa de Juros",
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a loan input is not strictly greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("O {field} deve ser maior do que zero!")]
pub struct ValidationError {
    pub field: LoanField,
}

impl ValidationError {
    pub fn new(field: LoanField) -> Self {
        Self { field }
    }

    /// Failure message as returned to API callers
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Check all three inputs, returning the first offending field
///
/// NaN is rejected like any other non-positive value.
pub fn validate(principal: f64, months: i32, monthly_rate_percent: f64) -> Result<(), ValidationError> {
    if principal.is_nan() || principal <= 0.0 {
        return Err(ValidationError::new(LoanField::Principal));
    }
    if months <= 0 {
        return Err(ValidationError::new(LoanField::Months));
    }
    if monthly_rate_percent.is_nan() || monthly_rate_percent <= 0.0 {
        return Err(ValidationError::new(LoanField::MonthlyRate));
    }
    Ok(())
}
