use cadence_core::error::CoreError;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod commands;
mod config;
mod http;

const DEFAULT_LOG_FILTER: &str = "cadence=info,cadence_core=info,tower_http=debug";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Serve(command) => commands::serve::serve(command).await,
        cli::Commands::NextDate(command) => commands::next_date::next_date(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidRepeat(s)) => {
            eprintln!("{} Invalid repeat rule: {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::InvalidDate(s)) => {
            eprintln!("{} Invalid date: {}", "Error:".style(error_style), s.yellow());
        }
        Some(CoreError::RuleExhausted(s)) => {
            eprintln!("{} No next date: {}", "Error:".style(error_style), s.yellow());
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
