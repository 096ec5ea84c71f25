//! Compound Interest CLI
//!
//! Runs the calculation endpoint locally and prints the JSON it would return

use anyhow::Context;
use clap::{Parser, Subcommand};
use compound_interest::{api, ApiResponse, Config, LoanQuery, ValidationMode};

#[derive(Debug, Parser)]
#[command(name = "compound-interest")]
#[command(about = "Compound interest calculator for loans with monthly capitalization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the final amount of a loan
    Calc {
        /// Loan principal
        #[arg(long, allow_negative_numbers = true)]
        valor_emprestimo: String,

        /// Number of months
        #[arg(long, allow_negative_numbers = true)]
        num_meses: String,

        /// Monthly interest rate in percent
        #[arg(long, allow_negative_numbers = true)]
        perc_taxa: String,

        /// Skip input validation (overrides JUROS_VALIDACAO)
        #[arg(long)]
        sem_validacao: bool,
    },
    /// Print the OpenAPI document
    Openapi,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("Failed to read configuration")?;

    match cli.command {
        Command::Calc {
            valor_emprestimo,
            num_meses,
            perc_taxa,
            sem_validacao,
        } => {
            if sem_validacao {
                config.validation = ValidationMode::Disabled;
            }

            let query = LoanQuery {
                principal: Some(valor_emprestimo),
                months: Some(num_meses),
                monthly_rate_percent: Some(perc_taxa),
            };
            let response = api::handle("GET", &query, &config);
            print_response(&response);

            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Command::Openapi => {
            let doc = api::openapi::document(&config);
            let text = serde_json::to_string_pretty(&doc).context("Failed to serialize OpenAPI document")?;
            println!("{}", text);
        }
    }

    Ok(())
}

fn print_response(response: &ApiResponse) {
    match &response.body {
        Some(body) => println!("{}", body),
        None => println!("HTTP {}", response.status),
    }
}
