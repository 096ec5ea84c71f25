//! Loan request and result records

use serde::{Deserialize, Serialize, Serializer};

use crate::calculation::{compute_with_mode, ValidationError, ValidationMode};

/// Inputs for one loan calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed
    #[serde(rename = "valorEmprestimo")]
    pub principal: f64,

    /// Loan term in whole months
    #[serde(rename = "numMeses")]
    pub months: i32,

    /// Monthly interest rate as a percentage (2.5 = 2.5%)
    #[serde(rename = "percTaxa")]
    pub monthly_rate_percent: f64,
}

impl LoanRequest {
    pub fn new(principal: f64, months: i32, monthly_rate_percent: f64) -> Self {
        Self {
            principal,
            months,
            monthly_rate_percent,
        }
    }

    /// Validate and compute the final amount
    pub fn calculate(&self) -> Result<LoanResult, ValidationError> {
        self.calculate_with_mode(ValidationMode::Enforced)
    }

    /// Compute the final amount, validating only when `mode` asks for it
    pub fn calculate_with_mode(&self, mode: ValidationMode) -> Result<LoanResult, ValidationError> {
        let final_amount = compute_with_mode(self.principal, self.months, self.monthly_rate_percent, mode)?;
        Ok(LoanResult {
            principal: self.principal,
            months: self.months,
            monthly_rate_percent: self.monthly_rate_percent,
            final_amount,
        })
    }
}

/// Successful calculation: echoed inputs plus the final amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    #[serde(rename = "valorEmprestimo")]
    pub principal: f64,

    // Published as a float in the response body
    #[serde(rename = "numMeses", serialize_with = "serialize_months")]
    pub months: i32,

    #[serde(rename = "taxaPercentual")]
    pub monthly_rate_percent: f64,

    #[serde(rename = "valorFinalComJuros")]
    pub final_amount: f64,
}

fn serialize_months<S: Serializer>(months: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(f64::from(*months))
}

/// Failure payload returned with a 400 response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationFailure {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl CalculationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for CalculationFailure {
    fn from(err: ValidationError) -> Self {
        Self::new(err.message())
    }
}
