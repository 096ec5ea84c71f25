//! HTTP adapter for the calculation endpoint
//!
//! Runtime-agnostic: `handle` maps a method and raw query parameters to a
//! status code and JSON body. The Lambda binary only translates to and
//! from `lambda_http` types.

pub mod openapi;
mod query;

pub use query::{LoanQuery, QueryError, MONTHS_PARAM, PRINCIPAL_PARAM, RATE_PARAM};

use log::{error, info};
use serde::Serialize;

use crate::config::Config;
use crate::loan::CalculationFailure;

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Status and body produced for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// JSON body; `None` for an empty response (CORS preflight)
    pub body: Option<String>,
}

impl ApiResponse {
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Serialize `payload` as the body, falling back to a 500 on failure
    pub fn json<T: Serialize>(status: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(e) => {
                error!("Falha ao serializar resposta: {}", e);
                Self {
                    status: 500,
                    body: Some(r#"{"mensagem":"Erro interno"}"#.to_string()),
                }
            }
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, &CalculationFailure::new(message))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handle one request to the calculation endpoint
pub fn handle(method: &str, query: &LoanQuery, config: &Config) -> ApiResponse {
    match method {
        "GET" => calculate(query, config),
        "OPTIONS" => ApiResponse::empty(200),
        other => {
            error!("Método não suportado: {}", other);
            ApiResponse::failure(405, format!("Método {} não suportado", other))
        }
    }
}

fn calculate(query: &LoanQuery, config: &Config) -> ApiResponse {
    info!(
        "Recebida nova requisição|Valor do empréstimo: {}|Número de meses: {}|% Taxa de Juros: {}",
        query.principal.as_deref().unwrap_or(""),
        query.months.as_deref().unwrap_or(""),
        query.monthly_rate_percent.as_deref().unwrap_or(""),
    );

    let request = match query.parse() {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            return ApiResponse::failure(400, e.to_string());
        }
    };

    match request.calculate_with_mode(config.validation) {
        Ok(result) => {
            info!("Valor Final com Juros: {}", result.final_amount);
            ApiResponse::json(200, &result)
        }
        Err(e) => {
            error!("{}", e);
            ApiResponse::json(400, &CalculationFailure::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ValidationMode;
    use approx::assert_relative_eq;
    use serde_json::Value;

    fn query(p: &str, m: &str, r: &str) -> LoanQuery {
        LoanQuery {
            principal: Some(p.to_string()),
            months: Some(m.to_string()),
            monthly_rate_percent: Some(r.to_string()),
        }
    }

    fn body(response: &ApiResponse) -> Value {
        serde_json::from_str(response.body.as_deref().unwrap()).unwrap()
    }

    fn disabled() -> Config {
        Config {
            validation: ValidationMode::Disabled,
            ..Config::default()
        }
    }

    #[test]
    fn test_success_body() {
        let response = handle("GET", &query("1000", "12", "1"), &Config::default());
        assert_eq!(response.status, 200);
        assert!(response.is_success());

        let json = body(&response);
        assert_eq!(json["valorEmprestimo"], 1000.0);
        assert_eq!(json["numMeses"], 12.0);
        assert_eq!(json["taxaPercentual"], 1.0);
        assert_relative_eq!(json["valorFinalComJuros"].as_f64().unwrap(), 1126.8250301319697, max_relative = 1e-12);
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            (query("0", "12", "1"), "O Valor do Empréstimo deve ser maior do que zero!"),
            (query("1000", "0", "1"), "O Número de Meses deve ser maior do que zero!"),
            (query("1000", "12", "-1"), "O Percentual da Taxa de Juros deve ser maior do que zero!"),
            (query("-1", "-1", "-1"), "O Valor do Empréstimo deve ser maior do que zero!"),
        ];
        for (q, expected) in cases {
            let response = handle("GET", &q, &Config::default());
            assert_eq!(response.status, 400);
            assert_eq!(body(&response)["mensagem"], expected);
        }
    }

    #[test]
    fn test_missing_and_malformed_params() {
        let response = handle("GET", &LoanQuery::default(), &Config::default());
        assert_eq!(response.status, 400);
        assert_eq!(body(&response)["mensagem"], "O parâmetro valorEmprestimo é obrigatório!");

        let response = handle("GET", &query("1000", "doze", "1"), &Config::default());
        assert_eq!(response.status, 400);
        assert_eq!(body(&response)["mensagem"], "O parâmetro numMeses deve ser numérico!");

        // Parsing is enforced even with validation disabled
        let response = handle("GET", &LoanQuery::default(), &disabled());
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_disabled_validation_computes_invalid_inputs() {
        let response = handle("GET", &query("-1000", "12", "1"), &disabled());
        assert_eq!(response.status, 200);
        assert_relative_eq!(
            body(&response)["valorFinalComJuros"].as_f64().unwrap(),
            -1126.8250301319697,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_overflow_serializes_as_null() {
        let response = handle("GET", &query("1e300", "100000", "100"), &Config::default());
        assert_eq!(response.status, 200);
        assert!(body(&response)["valorFinalComJuros"].is_null());
    }

    #[test]
    fn test_preflight_and_unsupported_methods() {
        let response = handle("OPTIONS", &LoanQuery::default(), &Config::default());
        assert_eq!(response, ApiResponse::empty(200));

        let response = handle("POST", &query("1000", "12", "1"), &Config::default());
        assert_eq!(response.status, 405);
        assert_eq!(body(&response)["mensagem"], "Método POST não suportado");
    }
}
