mod cli;
mod commands;
mod context;
mod utils;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use wealthdesk_api_client::{abortable, ApiConfig};

use crate::cli::Cli;
use crate::context::AppContext;

fn init_tracing() {
    let log_format = std::env::var("WD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ApiConfig::from_env()?;
    let ctx = AppContext::build(&config)?;

    // In-flight requests are cancelled when the user bails out; an aborted
    // fetch is not an error worth reporting.
    let (guard, task) = abortable(commands::dispatch(&ctx, cli.command));
    tokio::pin!(task);

    let result = tokio::select! {
        result = &mut task => result,
        _ = tokio::signal::ctrl_c() => {
            guard.abort();
            (&mut task).await
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_abort() => Ok(()),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
