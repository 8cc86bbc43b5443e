//! # cinema-tickets-cli
//!
//! Command-line front end for the purchase flow.
//!
//! ```text
//! purchase-tickets --account 1 ADULT=2 CHILD=1 INFANT=1
//! ```
//!
//! ## Configuration
//!
//! - `CINEMA_MAX_TICKETS_PER_PURCHASE` - Ticket cap (default: 20)
//! - `RUST_LOG` - Log filter (default: `info,cinema_tickets=info`)
//!
//! Values may also come from a `.env` file in the working directory.

pub mod services;

use cinema_tickets_core::{
    FailureRecorder, PurchaseConfig, PurchaseError, PurchaseOrchestrator, TicketRequest,
    TicketService,
};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::services::{LoggingPaymentService, LoggingSeatReservationService};

/// Purchase cinema tickets for an account.
#[derive(Debug, Parser)]
#[command(name = "purchase-tickets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account identifier. Must be strictly positive.
    #[arg(long, allow_negative_numbers = true)]
    pub account: Option<i64>,

    /// Maximum adult + child tickets per purchase. Overrides
    /// `CINEMA_MAX_TICKETS_PER_PURCHASE`.
    #[arg(long)]
    pub max_tickets: Option<u32>,

    /// Print Prometheus metrics after the purchase.
    #[arg(long)]
    pub print_metrics: bool,

    /// Make the payment service fail.
    #[arg(long)]
    pub fail_payment: bool,

    /// Make the seat reservation service fail.
    #[arg(long)]
    pub fail_reservation: bool,

    /// Tickets as `CATEGORY=QUANTITY`, e.g. `ADULT=2 INFANT=1`.
    #[arg(value_name = "CATEGORY=QTY")]
    pub tickets: Vec<TicketRequest>,
}

impl Cli {
    /// Purchase configuration derived from flags and environment.
    #[must_use]
    pub fn config(&self) -> PurchaseConfig {
        self.config_from(PurchaseConfig::from_env())
    }

    /// Applies command-line overrides on top of a base configuration.
    #[must_use]
    pub fn config_from(&self, base: PurchaseConfig) -> PurchaseConfig {
        match self.max_tickets {
            Some(max) => base.with_max_tickets_per_purchase(max),
            None => base,
        }
    }

    /// Builds the orchestrator with logging collaborators.
    #[must_use]
    pub fn orchestrator(&self, failures: Arc<dyn FailureRecorder>) -> PurchaseOrchestrator {
        PurchaseOrchestrator::new(
            Arc::new(LoggingPaymentService::new(self.fail_payment)),
            Arc::new(LoggingSeatReservationService::new(self.fail_reservation)),
        )
        .with_config(self.config())
        .with_failure_recorder(failures)
    }
}

/// Log filter used when `RUST_LOG` is unset.
///
/// The binary logs under its own target, so the global level must be set
/// alongside the library crates.
pub const DEFAULT_LOG_FILTER: &str = "info,cinema_tickets=info";

/// Builds the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Runs one purchase.
///
/// # Errors
///
/// Returns the purchase failure, if any.
pub fn run(cli: &Cli, failures: Arc<dyn FailureRecorder>) -> Result<(), PurchaseError> {
    cli.orchestrator(failures)
        .purchase_tickets(cli.account, &cli.tickets)
}

/// Formats a failure for stderr: `<CODE> (<legacy>): <message>`.
#[must_use]
pub fn describe_failure(error: &PurchaseError) -> String {
    let code = error.code();
    format!("{code} ({}): {error}", code.legacy_code())
}
