//! Compound Interest - serverless loan calculator with monthly capitalization
//!
//! This library provides:
//! - The compound interest formula and its input validation rules
//! - Loan request/result records with their JSON wire format
//! - A runtime-agnostic HTTP adapter for the calculation endpoint
//! - OpenAPI documentation for the endpoint
//! - Environment-based configuration

pub mod calculation;
pub mod loan;
pub mod api;
pub mod config;

// Re-export commonly used types
pub use calculation::{compute, LoanField, ValidationError, ValidationMode};
pub use loan::{LoanRequest, LoanResult, CalculationFailure};
pub use api::{ApiResponse, LoanQuery};
pub use config::Config;
