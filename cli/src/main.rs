//! `purchase-tickets` binary.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use anyhow::Result;
use cinema_tickets_cli::{describe_failure, log_filter, run, Cli};
use cinema_tickets_core::metrics::register_failure_metrics;
use cinema_tickets_core::MetricsFailureRecorder;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    info!(
        max_tickets = cli.config().max_tickets_per_purchase,
        "Configuration loaded"
    );

    let prometheus = PrometheusBuilder::new().install_recorder()?;
    register_failure_metrics();

    let outcome = run(&cli, Arc::new(MetricsFailureRecorder));

    if cli.print_metrics {
        println!("{}", prometheus.render());
    }

    match outcome {
        Ok(()) => {
            info!(account_id = ?cli.account, "Purchase complete");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", describe_failure(&error));
            if error.payment_committed() {
                warn!("Payment was taken but no seats are held; manual refund required");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
