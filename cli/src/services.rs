//! Logging collaborators for local runs.
//!
//! Stand-ins for the real payment gateway and seat booking system. They log
//! each call and succeed, unless built to fail.

use cinema_tickets_core::{
    AccountId, PaymentError, PaymentService, SeatReservationError, SeatReservationService,
};

/// Payment service that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingPaymentService {
    fail: bool,
}

impl LoggingPaymentService {
    /// Creates the service; `fail` makes every payment fail
    #[must_use]
    pub const fn new(fail: bool) -> Self {
        Self { fail }
    }
}

impl PaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        if self.fail {
            tracing::warn!(%account_id, amount, "Simulated payment failure");
            return Err(PaymentError::Unavailable {
                message: "simulated failure".to_string(),
            });
        }

        tracing::info!(%account_id, amount, "Payment taken");
        Ok(())
    }
}

/// Seat reservation service that only logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSeatReservationService {
    fail: bool,
}

impl LoggingSeatReservationService {
    /// Creates the service; `fail` makes every reservation fail
    #[must_use]
    pub const fn new(fail: bool) -> Self {
        Self { fail }
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u64,
    ) -> Result<(), SeatReservationError> {
        if self.fail {
            tracing::warn!(%account_id, seat_count, "Simulated seat reservation failure");
            return Err(SeatReservationError::Unavailable {
                message: "simulated failure".to_string(),
            });
        }

        tracing::info!(%account_id, seat_count, "Seats reserved");
        Ok(())
    }
}
