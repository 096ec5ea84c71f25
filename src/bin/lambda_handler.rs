//! AWS Lambda handler for the compound interest endpoint
//!
//! Answers `GET ?valorEmprestimo=&numMeses=&percTaxa=` with the final loan
//! amount. Supports Lambda Function URLs for direct HTTP access.

use compound_interest::{api, ApiResponse, Config, LoanQuery};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

/// Pull the three calculation parameters out of the request's query string
fn loan_query(event: &Request) -> LoanQuery {
    let params = event.query_string_parameters();
    LoanQuery::from_lookup(|key| params.first(key))
}

fn to_lambda_response(response: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(response.status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", api::ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type");

    let body = match response.body {
        Some(text) => {
            builder = builder.header("Content-Type", "application/json");
            Body::Text(text)
        }
        None => Body::Empty,
    };

    Ok(builder.body(body)?)
}

/// Lambda handler function
async fn handler(event: Request, config: &Config) -> Result<Response<Body>, Error> {
    let query = loan_query(&event);
    let response = api::handle(event.method().as_str(), &query, config);
    to_lambda_response(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "Starting handler (runtime: {}, validation: {:?})",
        config.worker_runtime,
        config.validation
    );

    let config = &config;
    run(service_fn(move |event: Request| async move { handler(event, config).await })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_loan_query_from_request() {
        let params: HashMap<String, String> = [
            ("valorEmprestimo", "1000"),
            ("numMeses", "12"),
            ("percTaxa", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let event = Request::default().with_query_string_parameters(params);

        let query = loan_query(&event);
        assert_eq!(query.principal.as_deref(), Some("1000"));
        assert_eq!(query.months.as_deref(), Some("12"));
        assert_eq!(query.monthly_rate_percent.as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_query_string() {
        let query = loan_query(&Request::default());
        assert_eq!(query, LoanQuery::default());
    }

    #[test]
    fn test_json_response_headers() {
        let response = to_lambda_response(ApiResponse::failure(400, "erro")).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        match response.body() {
            Body::Text(text) => assert_eq!(text, r#"{"mensagem":"erro"}"#),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_preflight_response() {
        let response = to_lambda_response(ApiResponse::empty(200)).unwrap();
        assert_eq!(response.status(), 200);
        assert!(response.headers().get("Content-Type").is_none());
        assert!(matches!(response.body(), Body::Empty));
    }
}
