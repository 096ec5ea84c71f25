//! Query string parameters for the calculation endpoint

use thiserror::Error;

use crate::loan::LoanRequest;

pub const PRINCIPAL_PARAM: &str = "valorEmprestimo";
pub const MONTHS_PARAM: &str = "numMeses";
pub const RATE_PARAM: &str = "percTaxa";

/// Problems turning raw query text into numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("O parâmetro {0} é obrigatório!")]
    Missing(&'static str),

    #[error("O parâmetro {0} deve ser numérico!")]
    NotNumeric(&'static str),
}

/// Raw, unparsed query parameters as received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanQuery {
    pub principal: Option<String>,
    pub months: Option<String>,
    pub monthly_rate_percent: Option<String>,
}

impl LoanQuery {
    /// Collect the three parameters from any key lookup
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Self {
            principal: lookup(PRINCIPAL_PARAM).map(str::to_owned),
            months: lookup(MONTHS_PARAM).map(str::to_owned),
            monthly_rate_percent: lookup(RATE_PARAM).map(str::to_owned),
        }
    }

    /// Parse into a `LoanRequest`, checking parameters in declaration order
    pub fn parse(&self) -> Result<LoanRequest, QueryError> {
        let principal: f64 = parse_param(PRINCIPAL_PARAM, self.principal.as_deref())?;
        let months: i32 = parse_param(MONTHS_PARAM, self.months.as_deref())?;
        let monthly_rate_percent: f64 = parse_param(RATE_PARAM, self.monthly_rate_percent.as_deref())?;

        Ok(LoanRequest::new(principal, months, monthly_rate_percent))
    }
}

fn parse_param<T: std::str::FromStr>(name: &'static str, raw: Option<&str>) -> Result<T, QueryError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(QueryError::Missing(name))?;
    raw.parse().map_err(|_| QueryError::NotNumeric(name))
}
