//! Loan calculation core: validation rules and the compound interest formula

mod compound;
mod validation;

pub use compound::{compute, compute_unchecked, compute_with_mode, ValidationMode};
pub use validation::{validate, LoanField, ValidationError};
