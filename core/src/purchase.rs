//! Purchase orchestration.
//!
//! ```text
//! purchase_tickets(account, requests)
//!   1. validate      → business failure, nothing called
//!   2. aggregate     → total amount, total seats
//!   3. make_payment  → on failure: PaymentFailed, no reservation
//!   4. reserve_seat  → on failure: ReservationFailed, payment NOT reversed
//! ```
//!
//! Calls are synchronous and strictly sequential. Identical calls are not
//! deduplicated: calling twice pays and reserves twice.

use std::fmt;
use std::sync::Arc;

use crate::config::PurchaseConfig;
use crate::error::{PurchaseError, Result};
use crate::metrics::{FailureRecorder, MetricsFailureRecorder};
use crate::services::{PaymentService, SeatReservationService};
use crate::types::{AccountId, PurchaseTotals, TicketRequest};
use crate::validation::validate_order;

/// Ticket purchasing entry point.
pub trait TicketService {
    /// Purchase tickets for an account.
    ///
    /// Succeeds with no value once payment has been taken and seats reserved.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError`] for the first business rule that fails, or
    /// when the payment or seat reservation service fails.
    fn purchase_tickets(&self, account_id: Option<i64>, requests: &[TicketRequest]) -> Result<()>;
}

/// Validates purchases and drives payment then seat reservation.
///
/// Holds no state between calls apart from whatever the injected
/// [`FailureRecorder`] keeps.
#[derive(Clone)]
pub struct PurchaseOrchestrator {
    payment: Arc<dyn PaymentService>,
    seats: Arc<dyn SeatReservationService>,
    failures: Arc<dyn FailureRecorder>,
    config: PurchaseConfig,
}

impl PurchaseOrchestrator {
    /// Creates an orchestrator with the default configuration, reporting
    /// failures through the `metrics` facade.
    #[must_use]
    pub fn new(payment: Arc<dyn PaymentService>, seats: Arc<dyn SeatReservationService>) -> Self {
        Self {
            payment,
            seats,
            failures: Arc::new(MetricsFailureRecorder),
            config: PurchaseConfig::default(),
        }
    }

    /// Replaces the failure recorder
    #[must_use]
    pub fn with_failure_recorder(mut self, failures: Arc<dyn FailureRecorder>) -> Self {
        self.failures = failures;
        self
    }

    /// Replaces the configuration
    #[must_use]
    pub const fn with_config(mut self, config: PurchaseConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PurchaseConfig {
        &self.config
    }

    fn take_payment(&self, account_id: AccountId, amount: u64) -> Result<()> {
        tracing::debug!(%account_id, amount, "Proceeding for payment");

        if let Err(error) = self.payment.make_payment(account_id, amount) {
            tracing::error!(
                %account_id,
                amount,
                %error,
                "Payment service failed to process payment"
            );
            return Err(self.operational_failure(PurchaseError::PaymentFailed { account_id }));
        }

        tracing::debug!(%account_id, amount, "Payment successful");
        Ok(())
    }

    fn reserve_seats(&self, account_id: AccountId, totals: PurchaseTotals) -> Result<()> {
        let seats = totals.total_seats;
        tracing::debug!(%account_id, seats, "Proceeding for seat reservation");

        if let Err(error) = self.seats.reserve_seat(account_id, seats) {
            tracing::error!(
                %account_id,
                seats,
                amount_charged = totals.total_amount,
                %error,
                "Seat reservation failed after payment was taken"
            );
            return Err(self.operational_failure(PurchaseError::ReservationFailed {
                account_id,
                amount_charged: totals.total_amount,
            }));
        }

        tracing::debug!(%account_id, seats, "Seat reservation successful");
        Ok(())
    }

    fn operational_failure(&self, error: PurchaseError) -> PurchaseError {
        self.failures.operational_failure(error.code());
        error
    }
}

impl TicketService for PurchaseOrchestrator {
    #[tracing::instrument(
        name = "purchase_tickets",
        skip(self, account_id, requests),
        fields(account_id = account_id.unwrap_or_default(), requests = requests.len())
    )]
    fn purchase_tickets(&self, account_id: Option<i64>, requests: &[TicketRequest]) -> Result<()> {
        tracing::debug!("Validating purchase request");

        let order = validate_order(account_id, requests, self.config.max_tickets_per_purchase)
            .inspect_err(|error| {
                tracing::error!(code = %error.code(), %error, "Purchase rejected");
                self.failures.business_failure(error.code());
            })?;

        let totals = order.totals();
        self.take_payment(order.account_id(), totals.total_amount)?;
        self.reserve_seats(order.account_id(), totals)
    }
}

impl fmt::Debug for PurchaseOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurchaseOrchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
