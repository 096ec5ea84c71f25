//! OpenAPI 3 document describing the calculation endpoint

use serde_json::{json, Value};

use super::query::{MONTHS_PARAM, PRINCIPAL_PARAM, RATE_PARAM};
use crate::config::Config;

pub const OPERATION_ID: &str = "JurosCompostos";
pub const ENDPOINT_PATH: &str = "/api/JurosCompostos";

/// Title shown by documentation viewers, including the worker runtime
pub fn title(config: &Config) -> String {
    format!("Juros Compostos | Worker Runtime: {}", config.worker_runtime)
}

/// Build the full OpenAPI document
pub fn document(config: &Config) -> Value {
    let mut doc = json!({
        "openapi": "3.0.1",
        "info": {
            "version": "1.0.0",
            "title": title(config),
            "description": "API de cálculo de juros compostos implementada com Rust + AWS Lambda",
            "contact": {
                "name": "Renato Groffe",
                "url": "https://github.com/renatogroffe"
            },
            "license": {
                "name": "MIT",
                "url": "http://opensource.org/licenses/MIT"
            }
        },
        "paths": {},
        "components": {
            "schemas": {
                "emprestimo": {
                    "type": "object",
                    "properties": {
                        "valorEmprestimo": { "type": "number", "format": "double" },
                        "numMeses": { "type": "number", "format": "double" },
                        "taxaPercentual": { "type": "number", "format": "double" },
                        "valorFinalComJuros": { "type": "number", "format": "double" }
                    }
                },
                "falhaCalculo": {
                    "type": "object",
                    "properties": {
                        "mensagem": { "type": "string" }
                    }
                }
            }
        }
    });
    doc["paths"][ENDPOINT_PATH] = operation();
    doc
}

fn operation() -> Value {
    json!({
        "get": {
            "tags": ["Juros"],
            "operationId": OPERATION_ID,
            "parameters": [
                query_param(PRINCIPAL_PARAM, "Valor do Empréstimo", "number", "double"),
                query_param(MONTHS_PARAM, "Número de Meses para pagamento", "integer", "int32"),
                query_param(RATE_PARAM, "Percentual da Taxa de Juros mensal", "number", "double")
            ],
            "responses": {
                "200": {
                    "description": "Valor do Empréstimo",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/emprestimo" }
                        }
                    }
                },
                "400": {
                    "description": "Falha nos cálculos do Empréstimo",
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/falhaCalculo" }
                        }
                    }
                }
            }
        }
    })
}

fn query_param(name: &str, description: &str, kind: &str, format: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "description": description,
        "required": true,
        "schema": { "type": kind, "format": format }
    })
}
