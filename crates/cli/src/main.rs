//! Checkout walkthrough entry point.

use std::process::ExitCode;

use cli::config::Config;
use common::UuidIdGenerator;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let config = Config::from_env();

    // Logs go to stderr so stdout carries only the walkthrough.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    match cli::run(&config, &UuidIdGenerator::new(), &mut stdout.lock()) {
        Ok(order) => {
            tracing::info!(order_id = %order.id(), status = %order.status(), "walkthrough finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "walkthrough failed");
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
